//! Display functions for the line-based game and command results

use super::formatters::{create_progress_bar, empty_row, guess_row, keyboard_rows};
use crate::commands::{CheckResult, WordReport};
use crate::game::{GameOutcome, GameRules, GameSession, Hint, LetterStates};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the welcome banner and rules
pub fn print_welcome(rules: &GameRules) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", "                 W O R D L E".bright_green().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nGuess the {}-letter word in {} attempts.",
        rules.word_length, rules.max_attempts
    );
    print_help();
}

/// Print the color legend and prompt commands
pub fn print_help() {
    println!("\nAfter each guess the tiles change color:");
    println!("  {} letter is in the right spot", " G ".black().on_green().bold());
    println!(
        "  {} letter is in the word but elsewhere",
        " Y ".black().on_yellow().bold()
    );
    println!("  {} letter is not in the word", " - ".white().on_bright_black());
    println!(
        "\nCommands: {} for a hint, {} for this help, {} to leave\n",
        "hint".bright_cyan(),
        "help".bright_cyan(),
        "quit".bright_cyan()
    );
}

/// Print every attempt so far plus placeholder rows for the rest
pub fn print_board(session: &GameSession<'_>) {
    println!();
    for attempt in session.attempts() {
        println!("  {}", guess_row(&attempt.guess, &attempt.result));
    }
    for _ in 0..session.attempts_remaining() {
        println!("  {}", empty_row(session.rules().word_length));
    }
    println!();
}

pub fn print_keyboard(states: &LetterStates) {
    for row in keyboard_rows(states) {
        println!("  {row}");
    }
    println!();
}

pub fn print_hint(hint: &Hint) {
    println!("💡 {}\n", hint.to_string().bright_cyan());
}

/// Print an error for a rejected guess
pub fn print_rejection(message: &str) {
    println!("❌ {}\n", message.red());
}

/// Print the end-of-game banner
pub fn print_game_over(outcome: &GameOutcome) {
    let secret = outcome.secret.text().to_uppercase();

    println!("{}", "─".repeat(60).cyan());
    if outcome.is_win() {
        let praise = match outcome.attempts {
            1 => "Genius!",
            2 => "Magnificent!",
            3 => "Impressive!",
            4 => "Splendid!",
            5 => "Great!",
            _ => "Phew!",
        };
        println!(
            "{}",
            format!("🎉 {praise} You found {secret}!").bright_green().bold()
        );
        println!(
            "   Solved in {} {}",
            outcome.attempts.to_string().bright_cyan().bold(),
            if outcome.attempts == 1 {
                "attempt"
            } else {
                "attempts"
            }
        );
    } else {
        println!(
            "{}",
            format!("😞 Out of attempts after {}.", outcome.attempts)
                .red()
                .bold()
        );
        println!("   The word was {}", secret.bright_yellow().bold());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the shareable emoji grid of a finished game
pub fn print_share_grid(session: &GameSession<'_>) {
    let score = if session.outcome().is_some_and(|o| o.is_win()) {
        session.attempts_used().to_string()
    } else {
        "X".to_string()
    };
    println!("\nWordle {score}/{}", session.max_attempts());
    for attempt in session.attempts() {
        println!("{}", attempt.result.to_emoji());
    }
    println!();
}

/// Print statistics with a guess distribution histogram
pub fn print_statistics(stats: &Statistics, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let rows = distribution_rows(stats, max_attempts);
    let peak = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for (attempts, count) in rows {
        let bar = create_progress_bar(count, peak, 30);
        println!("   {attempts:>2}: {} {count}", bar.green());
    }
    println!();
}

/// Histogram rows: every attempt count up to `max_attempts`, then only the
/// recorded counts beyond it
fn distribution_rows(stats: &Statistics, max_attempts: usize) -> Vec<(usize, u32)> {
    let mut rows: Vec<(usize, u32)> = (1..=max_attempts)
        .map(|attempts| (attempts, stats.wins_in(attempts)))
        .collect();
    rows.extend(
        stats
            .guess_distribution
            .range(max_attempts + 1..)
            .map(|(&attempts, &count)| (attempts, count)),
    );
    rows
}

/// Print the feedback for a single secret/guess pair
pub fn print_check_result(check: &CheckResult) {
    println!(
        "\n  {}   {}   {}",
        guess_row(&check.guess, &check.result),
        check.result.to_emoji(),
        check.result
    );
    println!(
        "  {} exact, {} present against {}\n",
        check.result.count_exact(),
        check.result.count_present(),
        check.secret.text().to_uppercase().bright_yellow()
    );
}

/// Print a word list report
pub fn print_word_report(report: &WordReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Word length:       {}", report.word_length);
    println!("   Secret words:      {}", report.answers);
    println!("   Accepted guesses:  {}", report.accepted);

    if !report.common_letters.is_empty() {
        let letters: Vec<String> = report
            .common_letters
            .iter()
            .map(|(letter, count)| format!("{}:{count}", letter.to_ascii_uppercase()))
            .collect();
        println!("   Common letters:    {}", letters.join(" "));
    }

    if let Some(filter) = &report.filter {
        println!(
            "\n🔍 {} {} ({} shown of {})",
            "Matching".bright_cyan().bold(),
            filter,
            report.matches.len(),
            report.total_matches
        );
    } else {
        println!(
            "\n🎲 {} ({} shown)",
            "Random sample".bright_cyan().bold(),
            report.matches.len()
        );
    }

    for chunk in report.matches.chunks(8) {
        let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", line.join("  "));
    }
    println!();
}
