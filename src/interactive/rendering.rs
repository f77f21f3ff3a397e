//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{MAX_ATTEMPTS, Verdict, WORD_LENGTH};
use crate::game::{GameSession, Phase};
use crate::output::formatters::keyboard_hints;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S, O>(f: &mut Frame, app: &App<S, O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board + messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages
        ])
        .split(chunks[1]);

    let session = app.controller.session();
    render_board(f, session, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, session, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
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

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile_span(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

/// Lines for the six board rows: scored, in progress, then empty
fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = session
        .attempts()
        .iter()
        .map(|attempt| {
            let tiles = attempt
                .guess
                .text()
                .chars()
                .zip(attempt.feedback.verdicts())
                .flat_map(|(letter, &verdict)| {
                    [tile_span(letter, verdict_style(verdict)), Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            Line::from(tiles)
        })
        .collect();

    if !session.is_over() {
        let style = if session.phase() == Phase::Validating {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::SLOW_BLINK)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let typed: Vec<char> = session.current_guess().chars().collect();
        let tiles = (0..WORD_LENGTH)
            .flat_map(|i| {
                let tile = typed.get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&letter| tile_span(letter, style),
                );
                [tile, Span::raw(" ")]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(tiles));
    }

    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::from(Span::styled(
            " _   _   _   _   _ ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for line in board_lines(session) {
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn keyboard_lines(hints: &FxHashMap<char, Verdict>) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys = row
                .chars()
                .flat_map(|key| {
                    let style = hints.get(&key).map_or_else(
                        || Style::default().fg(Color::White).bg(Color::Gray),
                        |&verdict| verdict_style(verdict),
                    );
                    [tile_span(key, style), Span::raw(" ")]
                })
                .collect::<Vec<_>>();
            Line::from(keys)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let hints = keyboard_hints(session.attempts());
    let keyboard = Paragraph::new(keyboard_lines(&hints))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S, O>(f: &mut Frame, app: &App<S, O>, area: Rect) {
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

fn render_status<S, O>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let session = app.controller.session();
    let streak = app.controller.streak();

    let streak_text = format!("Streak: {} | Best: {}", streak.current(), streak.best());
    let streak_widget = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak_widget, chunks[0]);

    let phase_text = match session.phase() {
        Phase::AwaitingInput | Phase::RowComplete => {
            format!("Tries left: {}", session.attempts_remaining())
        }
        Phase::Validating => "Checking word...".to_string(),
        Phase::Won => "Solved!".to_string(),
        Phase::Lost => "Out of tries".to_string(),
    };
    let phase = Paragraph::new(phase_text).alignment(Alignment::Center);
    f.render_widget(phase, chunks[1]);

    let word_text = if app.show_word {
        session.target().text().to_uppercase()
    } else {
        "Show Word (TAB)".to_string()
    };
    let word = Paragraph::new(word_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(word, chunks[2]);

    let help_text = if session.is_over() {
        "Enter: New Game | q: Quit"
    } else {
        "Enter: Submit | Ctrl+N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
