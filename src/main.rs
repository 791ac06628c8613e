//! Wordle - CLI
//!
//! Terminal word-guessing game with a line mode, a full-screen TUI and a few
//! helper commands for inspecting feedback, word lists and statistics.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{WordQuery, check_words, export_words, run_play, run_stats, word_report},
    config::{Config, Overrides},
    interactive::{App, run_tui},
    logging,
    output::{print_check_result, print_statistics, print_word_report},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the secret word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/wordle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Secret word list, one word per line
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Extra accepted guesses, one word per line
    #[arg(short, long, global = true)]
    allowed: Option<PathBuf>,

    /// Attempts per game
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    /// Letters per word
    #[arg(long, global = true)]
    word_length: Option<usize>,

    /// Accept any word of the right length as a guess
    #[arg(long, global = true)]
    no_validate: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Statistics file (default: <data dir>/wordle/stats.json)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Do not load or save statistics
    #[arg(long, global = true)]
    no_stats: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess per line (default)
    Play,

    /// Play in a full-screen terminal UI
    Tui,

    /// Show the feedback a guess gets against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Inspect, filter or export the word list
    Words {
        /// Only words starting with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Only words containing this letter
        #[arg(long)]
        letter: Option<char>,

        /// Only words matching this pattern ('?' matches any letter)
        #[arg(long)]
        pattern: Option<String>,

        /// Number of words and common letters to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Write the secret word list to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Show saved statistics
    Stats {
        /// Clear all saved statistics
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            no_validate: self.no_validate,
            no_color: self.no_color,
            no_stats: self.no_stats,
            wordlist: self.wordlist.clone(),
            allowed: self.allowed.clone(),
            stats_file: self.stats_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply(cli.overrides());
    config.validate().context("Invalid configuration")?;
    debug!("Effective config: {config:?}");

    if !config.color {
        colored::control::set_override(false);
    }

    // Default to line mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(&config),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Words {
            prefix,
            letter,
            pattern,
            top,
            export,
        } => {
            let query = WordQuery {
                prefix,
                letter,
                pattern,
                top,
            };
            run_words_command(&config, &query, export.as_deref())
        }
        Commands::Stats { reset } => run_stats_command(&config, reset),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let source = config.word_source()?;
    let store = config.stats_store();
    let mut input = io::stdin().lock();
    let mut rng = rand::rng();

    run_play(
        &source,
        config.rules(),
        store.as_ref(),
        &mut input,
        &mut rng,
    )?;
    Ok(())
}

fn run_tui_command(config: &Config) -> Result<()> {
    let source = config.word_source()?;
    let app = App::new(&source, config.rules(), config.stats_store(), rand::rng())?;
    run_tui(app)
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let check = check_words(secret, guess)?;
    print_check_result(&check);
    Ok(())
}

fn run_words_command(
    config: &Config,
    query: &WordQuery,
    export: Option<&std::path::Path>,
) -> Result<()> {
    let source = config.word_source()?;

    if let Some(path) = export {
        let count = export_words(&source, path)?;
        println!("Exported {count} words to {}", path.display());
        return Ok(());
    }

    let report = word_report(&source, query, &mut rand::rng());
    print_word_report(&report);
    Ok(())
}

fn run_stats_command(config: &Config, reset: bool) -> Result<()> {
    let stats = run_stats(config.stats_store().as_ref(), reset)?;
    if reset {
        println!("Statistics reset.");
    }
    print_statistics(&stats, config.max_attempts);
    Ok(())
}
