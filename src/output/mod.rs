//! Terminal output formatting
//!
//! Colored rendering of the board, keyboard and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_game_over, print_help, print_hint, print_keyboard,
    print_rejection, print_share_grid, print_statistics, print_welcome, print_word_report,
};
