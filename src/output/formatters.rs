//! Formatting utilities for terminal output

use crate::core::{GuessResult, Mark, Word};
use crate::game::{KEYBOARD_ROWS, LetterStates};
use colored::{ColoredString, Colorize};

/// A single letter as a colored tile
#[must_use]
pub fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Exact) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One attempt as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, result: &GuessResult) -> String {
    guess
        .letters()
        .iter()
        .zip(result.marks())
        .map(|(&letter, &mark)| tile(char::from(letter), Some(mark)).to_string())
        .collect()
}

/// Placeholder row for an unused attempt
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    " _ ".repeat(word_length).bright_black().to_string()
}

/// Keyboard rows with each letter colored by its known state
#[must_use]
pub fn keyboard_rows(states: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| key(letter, states.get(letter)).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

fn key(letter: u8, mark: Option<Mark>) -> ColoredString {
    let text = char::from(letter.to_ascii_uppercase()).to_string();
    match mark {
        Some(Mark::Exact) => text.green().bold(),
        Some(Mark::Present) => text.yellow().bold(),
        Some(Mark::Absent) => text.bright_black().strikethrough(),
        None => text.white(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(value) * width as u64 / u64::from(max)) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
