//! TUI rendering with ratatui
//!
//! Board grid, on-screen keyboard, messages and status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::game::{KEYBOARD_ROWS, LetterStates};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let board_height = u16::try_from(app.rules.max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board + messages
            Constraint::Length(5),            // Keyboard
            Constraint::Length(3),            // Input
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, app.session.letter_states(), chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background color of a tile
fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, mark: Option<Mark>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(mark) => Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn empty_tile() -> Span<'static> {
    Span::styled(" _ ", Style::default().fg(Color::DarkGray))
}

fn board_lines<R: Rng>(app: &App<'_, R>) -> Vec<Line<'static>> {
    let length = app.rules.word_length;
    let mut lines: Vec<Line> = app
        .session
        .attempts()
        .iter()
        .map(|attempt| {
            let spans: Vec<Span> = attempt
                .guess
                .letters()
                .iter()
                .zip(attempt.result.marks())
                .map(|(&letter, &mark)| tile(char::from(letter), Some(mark)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let mut remaining = app.session.attempts_remaining();
    if app.input_mode == InputMode::Guessing && remaining > 0 {
        let mut spans: Vec<Span> = app.input_buffer.chars().map(|c| tile(c, None)).collect();
        spans.extend((spans.len()..length).map(|_| empty_tile()));
        lines.push(Line::from(spans));
        remaining -= 1;
    }

    for _ in 0..remaining {
        lines.push(Line::from(
            (0..length).map(|_| empty_tile()).collect::<Vec<_>>(),
        ));
    }

    lines
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(states: &LetterStates) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
                    let style = match states.get(letter) {
                        Some(mark) => Style::default().fg(Color::Black).bg(mark_color(mark)),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, states: &LetterStates, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(states))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess | Enter to submit, TAB for a hint ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts = Paragraph::new(format!(
        "Attempt: {}/{}",
        app.session.attempts_used(),
        app.session.max_attempts()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit | TAB: Hint")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
