//! Line-based interactive game
//!
//! Reads guesses from any `BufRead`, so a real terminal and a scripted test
//! drive the same loop. End of input is treated like `quit`.

use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameOutcome, GameRules, GameSession};
use crate::output::{
    print_board, print_game_over, print_help, print_hint, print_keyboard, print_rejection,
    print_share_grid, print_statistics, print_welcome,
};
use crate::stats::StatsStore;
use crate::wordlists::WordSource;
use anyhow::Result;
use log::{debug, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a single game ended from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished,
    Quit,
}

/// Play games until the player quits or declines another round
///
/// Returns the outcome of every finished game; an abandoned game is not
/// included and not recorded in the statistics.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails, or if a
/// game cannot be started under the given rules.
pub fn run_play<R: BufRead, G: Rng + ?Sized>(
    source: &WordSource,
    rules: GameRules,
    store: Option<&StatsStore>,
    input: &mut R,
    rng: &mut G,
) -> Result<Vec<GameOutcome>> {
    let mut stats = store.map(StatsStore::load).unwrap_or_default();
    let mut outcomes = Vec::new();

    print_welcome(&rules);

    loop {
        let mut session = GameSession::start(source, rules, rng)?;

        if play_game(&mut session, input)? == GameEnd::Quit {
            break;
        }

        let Some(outcome) = session.outcome() else {
            break;
        };

        print_game_over(&outcome);
        print_share_grid(&session);

        stats.record(outcome.is_win(), outcome.attempts);
        if let Some(store) = store
            && let Err(e) = store.save(&stats)
        {
            warn!("Could not save statistics: {e:#}");
        }
        print_statistics(&stats, rules.max_attempts);
        outcomes.push(outcome);

        let again = read_line(input, "Play again? (y/n)")?;
        if !matches!(again.as_deref(), Some("y" | "yes" | "yeah" | "sure")) {
            break;
        }
        println!("\n🔄 New game started!");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(outcomes)
}

fn play_game<R: BufRead>(session: &mut GameSession<'_>, input: &mut R) -> Result<GameEnd> {
    while !session.is_over() {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts_used() + 1,
            session.max_attempts()
        );

        let Some(line) = read_line(input, &prompt)? else {
            debug!("Input closed mid-game");
            return Ok(GameEnd::Quit);
        };

        match line.as_str() {
            "" => {}
            "quit" | "exit" | "q" => return Ok(GameEnd::Quit),
            "hint" => print_hint(&session.hint()),
            "help" => print_help(),
            text => {
                let submitted = Word::new(text)
                    .map_err(GameError::from)
                    .and_then(|guess| session.submit_guess(&guess));

                match submitted {
                    Ok(_) => {
                        print_board(session);
                        if !session.is_over() {
                            print_keyboard(session.letter_states());
                        }
                    }
                    Err(e) if e.is_guess_error() => print_rejection(&e.to_string()),
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Ok(GameEnd::Finished)
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
