//! TUI application state and logic

use crate::core::Word;
use crate::error::GameError;
use crate::game::{GameRules, GameSession};
use crate::stats::{Statistics, StatsStore};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, R: Rng> {
    pub source: &'a WordSource,
    pub rules: GameRules,
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub store: Option<StatsStore>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, R: Rng> App<'a, R> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be played with this word source.
    pub fn new(
        source: &'a WordSource,
        rules: GameRules,
        store: Option<StatsStore>,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let session = GameSession::start(source, rules, &mut rng)?;
        let stats = store.as_ref().map(StatsStore::load).unwrap_or_default();

        let mut app = Self {
            source,
            rules,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            store,
            input_mode: InputMode::Guessing,
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} attempts.",
                rules.word_length, rules.max_attempts
            ),
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter. TAB for a hint.", MessageStyle::Info);
        Ok(app)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Char(c) => self.type_letter(c),
                _ => {}
            },
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.rules.word_length {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        if self.input_buffer.is_empty() {
            return;
        }

        let submitted = Word::new(&self.input_buffer)
            .map_err(GameError::from)
            .and_then(|guess| self.session.submit_guess(&guess));

        match submitted {
            Ok(result) => {
                self.input_buffer.clear();
                if self.session.is_over() {
                    self.finish_game();
                } else {
                    self.add_message(
                        &format!(
                            "{} exact, {} present. {} attempts left.",
                            result.count_exact(),
                            result.count_present(),
                            self.session.attempts_remaining()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => self.add_message(&capitalize(&e.to_string()), MessageStyle::Error),
        }
    }

    pub fn show_hint(&mut self) {
        let hint = self.session.hint();
        self.add_message(&format!("Hint: {hint}"), MessageStyle::Info);
    }

    fn finish_game(&mut self) {
        let Some(outcome) = self.session.outcome() else {
            return;
        };

        self.stats.record(outcome.is_win(), outcome.attempts);
        if let Some(store) = &self.store
            && let Err(e) = store.save(&self.stats)
        {
            warn!("Could not save statistics: {e:#}");
            self.add_message("Could not save statistics", MessageStyle::Error);
        }

        let secret = outcome.secret.text().to_uppercase();
        if outcome.is_win() {
            let celebration = match outcome.attempts {
                1 => "🎯 Genius! First try!".to_string(),
                n => format!("🎉 Solved {secret} in {n} attempts!"),
            };
            self.add_message(&celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("The word was {secret}."), MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        match GameSession::start(self.source, self.rules, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn source() -> WordSource {
        WordSource::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["trace", "slate"]),
            5,
        )
        .unwrap()
    }

    fn app(source: &WordSource) -> App<'_, StdRng> {
        App::new(source, GameRules::default(), None, StdRng::seed_from_u64(3)).unwrap()
    }

    fn press(app: &mut App<'_, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<'_, StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_word_length() {
        let source = source();
        let mut app = app(&source);

        for c in "cr4anes".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "crane");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "cran");
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let source = source();
        let mut app = app(&source);
        for c in "TRA".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "tra");
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let source = source();
        let mut app = app(&source);
        type_word(&mut app, "cra");

        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.input_buffer, "cra");
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn winning_switches_to_game_over() {
        let source = source();
        let mut app = app(&source);

        type_word(&mut app, "trace");
        assert_eq!(app.session.attempts_used(), 1);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "crane");
        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.wins_in(2), 1);
    }

    #[test]
    fn new_game_after_game_over() {
        let source = source();
        let mut app = app(&source);
        type_word(&mut app, "crane");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempts_used(), 0);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn hint_does_not_use_an_attempt() {
        let source = source();
        let mut app = app(&source);
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.session.attempts_used(), 0);
        assert!(
            app.messages
                .last()
                .is_some_and(|m| m.text.contains("starts with 'C'"))
        );
    }

    #[test]
    fn quit_keys() {
        let source = source();
        let mut app = app(&source);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while guessing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&source);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_history_is_bounded() {
        let source = source();
        let mut app = app(&source);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("word must be"), "Word must be");
        assert_eq!(capitalize(""), "");
    }
}
