//! WORDCHAIN - head-to-tail word duel for the terminal
//!
//! Link words, beat the clock, outscore the machine.

mod app;
mod game;
mod tui;

use app::{Coordinator, Screen};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use tui::Tui;

fn main() -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Loads the dictionary up front; a bad word source surfaces as a
    // setup-screen notice, not a failure
    let mut coordinator = Coordinator::new();

    // Countdown advances once per second; input polling stays finer so
    // deferred computer moves fire promptly
    let tick_rate = Duration::from_secs(1);
    let poll_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Calculate timeout for the next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(poll_rate);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut coordinator, key.code);
                }
            }
        }

        // Fire a due computer move, if any
        coordinator.poll();

        // Handle timer tick
        if last_tick.elapsed() >= tick_rate {
            coordinator.tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

enum View {
    Setup,
    Game,
    Over,
}

fn handle_key(coordinator: &mut Coordinator, code: KeyCode) {
    let view = match &coordinator.screen {
        Screen::Setup(_) => View::Setup,
        Screen::Playing { session, .. } if session.is_over() => View::Over,
        Screen::Playing { .. } => View::Game,
    };

    match view {
        View::Setup => match code {
            KeyCode::Up => coordinator.setup_up(),
            KeyCode::Down => coordinator.setup_down(),
            KeyCode::Left => coordinator.setup_cycle(false),
            KeyCode::Right => coordinator.setup_cycle(true),
            KeyCode::Enter => coordinator.setup_select(),
            KeyCode::Esc => coordinator.quit(),
            _ => {}
        },
        View::Game => match code {
            KeyCode::Esc => coordinator.end_game(),
            KeyCode::Enter => coordinator.submit_input(),
            KeyCode::Backspace => coordinator.on_backspace(),
            KeyCode::Tab => coordinator.skip(),
            KeyCode::Char(' ') => coordinator.toggle_pause(),
            KeyCode::Char('?') => coordinator.request_hint(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => coordinator.on_char(c),
            _ => {}
        },
        View::Over => match code {
            KeyCode::Enter => coordinator.play_again(),
            KeyCode::Esc => coordinator.back_to_menu(),
            _ => {}
        },
    }
}
