#![allow(dead_code)]
//! UI rendering using ratatui
//!
//! Three views:
//! - Setup: mode / time limit / difficulty selection
//! - Playing: scores, countdown, word chain, input, history feed
//! - Game over: winner and final stats (rendered when the session ends)

use crate::app::screen::{SetupRow, SetupState, TIME_CHOICES};
use crate::app::state::LogKind;
use crate::app::{Coordinator, Outcome, PlayerId, Screen, Session};
use crate::game::Difficulty;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Countdown turns red at or below this many seconds
const TIMER_WARNING_SECS: u32 = 10;

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &Coordinator) {
    match &coordinator.screen {
        Screen::Setup(setup) => render_setup(frame, setup, coordinator.notice.as_deref()),
        Screen::Playing { session, input } => {
            if session.is_over() {
                render_game_over(frame, session);
            } else {
                render_game(frame, session, input);
            }
        }
    }
}

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Cyan,
        PlayerId::Two => Color::Magenta,
    }
}

/// Render the setup screen
fn render_setup(frame: &mut Frame, setup: &SetupState, notice: Option<&str>) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Logo
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Spacer
            Constraint::Min(8),    // Option rows
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
__        _____  ____  ____   ____ _   _    _    ___ _   _
\ \      / / _ \|  _ \|  _ \ / ___| | | |  / \  |_ _| \ | |
 \ \ /\ / / | | | |_) | | | | |   | |_| | / _ \  | ||  \| |
  \ V  V /| |_| |  _ <| |_| | |___|  _  |/ ___ \ | || |\  |
   \_/\_/  \___/|_| \_\____/ \____|_| |_/_/   \_\___|_| \_|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    if let Some(message) = notice {
        let notice_widget = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(notice_widget, layout[1]);
    }

    let time_label = |secs: u32| -> String {
        if secs == 0 {
            "Unlimited".to_string()
        } else {
            format!("{}s", secs)
        }
    };

    let rows: Vec<(String, String)> = vec![
        ("Mode".to_string(), setup.mode().label().to_string()),
        ("Time per turn".to_string(), time_label(TIME_CHOICES[setup.time_idx])),
        (
            "Difficulty".to_string(),
            Difficulty::all()[setup.difficulty_idx].label().to_string(),
        ),
        ("Start Game".to_string(), String::new()),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let selected = i == setup.row;
            let style = if selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { "> " } else { "  " };
            let is_start = SetupRow::all()[i] == SetupRow::Start;
            let text = if is_start {
                format!("{}[ {} ]", prefix, label)
            } else {
                format!("{}{}: < {} >", prefix, label, value)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  ←→ Change  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, session: &Session, input: &str) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Player panels + status
            Constraint::Length(6), // Word chain
            Constraint::Length(3), // Input
            Constraint::Min(4),    // History feed
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_scoreboard(frame, layout[0], session);
    render_chain(frame, layout[1], session);
    render_input(frame, layout[2], session, input);
    render_history(frame, layout[3], session);

    let footer =
        Paragraph::new("Type a word  Enter Submit  Tab Skip  Space Pause  ? Hint  Esc End game")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Player panels with the timer and required letter between them
fn render_scoreboard(frame: &mut Frame, area: Rect, session: &Session) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    for (column, id) in [(columns[0], PlayerId::One), (columns[2], PlayerId::Two)] {
        let player = session.player(id);
        let active = session.current() == id;
        let mut style = Style::default().fg(player_color(id));
        if active {
            style = style.bold();
        }
        let marker = if active { "▶ " } else { "  " };
        let title = format!("{}{}", marker, player.name);
        let body = format!("Score: {}", player.score);
        let panel = Paragraph::new(body).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(style),
        );
        frame.render_widget(panel, column);
    }

    let timer_display = if session.is_paused() {
        "PAUSED".to_string()
    } else if session.time_limit == 0 {
        "∞".to_string()
    } else {
        format!("{}s", session.time_remaining())
    };
    let timer_style = if session.is_paused() {
        Style::default().fg(Color::Yellow).bold()
    } else if session.time_limit != 0 && session.time_remaining() <= TIMER_WARNING_SECS {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    let next_letter = match session.required_letter() {
        Some(letter) => letter.to_ascii_uppercase().to_string(),
        None => "Any".to_string(),
    };

    let status = Paragraph::new(vec![
        Line::styled(timer_display, timer_style),
        Line::styled(
            format!("Next letter: {}", next_letter),
            Style::default().fg(Color::Green).bold(),
        ),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(format!(
        "Turn {}",
        session.turn_count() + 1
    )));
    frame.render_widget(status, columns[1]);
}

/// The chain of accepted words, colored by player
fn render_chain(frame: &mut Frame, area: Rect, session: &Session) {
    let chain = session.chain();

    let content: Line = if chain.is_empty() {
        Line::styled(
            "Game starts with the first word!",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let mut spans: Vec<Span> = Vec::new();
        for (i, entry) in chain.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("{} (+{})", entry.word, entry.score),
                Style::default().fg(player_color(entry.player)),
            ));
        }
        Line::from(spans)
    };

    let chain_widget = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Word Chain ({} words)",
            chain.len()
        )));
    frame.render_widget(chain_widget, area);
}

/// The input line for the current human player
fn render_input(frame: &mut Frame, area: Rect, session: &Session, input: &str) {
    let (text, style) = if session.current_is_computer() {
        (
            format!("{} is thinking...", session.current_player().name),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (format!("{}_", input), Style::default().fg(Color::White))
    };

    let input_widget = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your word")
            .border_style(Style::default().fg(player_color(session.current()))),
    );
    frame.render_widget(input_widget, area);
}

/// History feed, newest first
fn render_history(frame: &mut Frame, area: Rect, session: &Session) {
    let items: Vec<ListItem> = session
        .history()
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                LogKind::Info => Style::default().fg(Color::White),
                LogKind::Rejection => Style::default().fg(Color::Red),
            };
            ListItem::new(entry.message.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(list, area);
}

/// Render the game-over screen
fn render_game_over(frame: &mut Frame, session: &Session) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(3), // Winner
            Constraint::Length(7), // Final stats
            Constraint::Length(2), // Footer
            Constraint::Percentage(20),
        ])
        .margin(2)
        .split(area);

    let winner_text = match session.outcome() {
        Some(Outcome::Winner(id)) => format!("{} Wins!", session.player(id).name),
        Some(Outcome::Tie) => "It's a Tie!".to_string(),
        None => String::new(),
    };
    let winner = Paragraph::new(winner_text)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(winner, layout[1]);

    let p1 = session.player(PlayerId::One);
    let p2 = session.player(PlayerId::Two);
    let stats = vec![
        Line::from(format!("{}: {} points", p1.name, p1.score)),
        Line::from(format!("{}: {} points", p2.name, p2.score)),
        Line::from(""),
        Line::from(format!("Total words: {}", session.chain().len())),
        Line::from(format!("Total turns: {}", session.turn_count())),
    ];
    let stats_widget = Paragraph::new(stats)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Final Stats"));
    frame.render_widget(stats_widget, layout[2]);

    let footer = Paragraph::new("Enter Play Again  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}
