//! Screen state and command routing
//!
//! Handles transitions between the application screens:
//! - Setup (mode / time limit / difficulty selection)
//! - Playing (the game itself; a finished session renders as game over)
//!
//! Also owns the deferred computer-move schedule. A scheduled move
//! carries the session epoch from schedule time and is re-validated when
//! it fires, so pausing or ending the game silently cancels it.

use crate::game::dictionary::{self, Dictionary};
use crate::game::{ai, Difficulty};
use std::time::Instant;

use super::state::{GameMode, PlayerId, Session};

/// Selectable per-turn time limits in seconds (0 = unlimited)
pub const TIME_CHOICES: &[u32] = &[0, 15, 30, 60];

/// Rejected computer submissions tolerated before forcing a skip
const AI_RETRY_LIMIT: u32 = 4;

/// Delay before a computer player retries after a rejection
const AI_RETRY_DELAY_MS: u64 = 1000;

/// Rows on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupRow {
    Mode,
    TimeLimit,
    Difficulty,
    Start,
}

impl SetupRow {
    pub fn all() -> &'static [SetupRow] {
        &[
            SetupRow::Mode,
            SetupRow::TimeLimit,
            SetupRow::Difficulty,
            SetupRow::Start,
        ]
    }
}

/// Selections made on the setup screen
pub struct SetupState {
    pub row: usize,
    pub mode_idx: usize,
    pub time_idx: usize,
    pub difficulty_idx: usize,
}

impl SetupState {
    fn new() -> Self {
        Self {
            row: 0,
            mode_idx: 0,
            // default to 60 seconds, medium
            time_idx: TIME_CHOICES.len() - 1,
            difficulty_idx: 1,
        }
    }

    pub fn mode(&self) -> GameMode {
        GameMode::all()[self.mode_idx]
    }

    pub fn time_limit(&self) -> u32 {
        TIME_CHOICES[self.time_idx]
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::all()[self.difficulty_idx]
    }
}

/// The current application screen
pub enum Screen {
    /// Choosing game settings
    Setup(SetupState),
    /// A game in progress (or finished, awaiting play-again/menu)
    Playing { session: Session, input: String },
}

/// A deferred computer move, valid only for the epoch it was scheduled in
struct AiTask {
    due: Instant,
    epoch: u64,
}

/// Main application coordinator
pub struct Coordinator {
    pub screen: Screen,
    pub should_quit: bool,
    /// Load warning from the dictionary, shown on the setup screen
    pub notice: Option<String>,
    dict: &'static Dictionary,
    handle: String,
    pending_ai: Option<AiTask>,
    ai_retries: u32,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Create a coordinator at the setup screen. Forces the dictionary
    /// load so a source problem surfaces here instead of mid-game.
    pub fn new() -> Self {
        Self::with_dictionary(dictionary::global())
    }

    /// [`Coordinator::new`] against a specific dictionary
    pub fn with_dictionary(dict: &'static Dictionary) -> Self {
        let handle = std::env::var("USER")
            .unwrap_or_else(|_| "Player".to_string())
            .chars()
            .take(12)
            .collect::<String>();

        let notice = dict
            .load_error()
            .map(|e| format!("Using built-in word list ({})", e));

        Self {
            screen: Screen::Setup(SetupState::new()),
            should_quit: false,
            notice,
            dict,
            handle,
            pending_ai: None,
            ai_retries: 0,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing { session, .. } => Some(session),
            _ => None,
        }
    }

    // --- setup screen -------------------------------------------------

    pub fn setup_up(&mut self) {
        if let Screen::Setup(setup) = &mut self.screen {
            if setup.row > 0 {
                setup.row -= 1;
            }
        }
    }

    pub fn setup_down(&mut self) {
        if let Screen::Setup(setup) = &mut self.screen {
            if setup.row < SetupRow::all().len() - 1 {
                setup.row += 1;
            }
        }
    }

    /// Cycle the value on the selected setup row
    pub fn setup_cycle(&mut self, forward: bool) {
        if let Screen::Setup(setup) = &mut self.screen {
            let cycle = |idx: usize, len: usize| {
                if forward {
                    (idx + 1) % len
                } else {
                    (idx + len - 1) % len
                }
            };
            match SetupRow::all()[setup.row] {
                SetupRow::Mode => setup.mode_idx = cycle(setup.mode_idx, GameMode::all().len()),
                SetupRow::TimeLimit => setup.time_idx = cycle(setup.time_idx, TIME_CHOICES.len()),
                SetupRow::Difficulty => {
                    setup.difficulty_idx = cycle(setup.difficulty_idx, Difficulty::all().len())
                }
                SetupRow::Start => {}
            }
        }
    }

    /// Enter on the setup screen: start the game from the Start row,
    /// otherwise move down to the next row
    pub fn setup_select(&mut self) {
        let start = match &self.screen {
            Screen::Setup(setup) => SetupRow::all()[setup.row] == SetupRow::Start,
            _ => return,
        };
        if start {
            self.start_game();
        } else {
            self.setup_down();
        }
    }

    /// Build a fresh session from the setup selections
    pub fn start_game(&mut self) {
        let Screen::Setup(setup) = &self.screen else {
            return;
        };

        let mode = setup.mode();
        let mut session = Session::new(mode, setup.time_limit(), setup.difficulty());
        if mode == GameMode::HumanVsComputer {
            session.set_player_name(PlayerId::One, &self.handle);
        }

        self.screen = Screen::Playing {
            session,
            input: String::new(),
        };
        self.reconcile_ai();
    }

    // --- playing screen -----------------------------------------------

    /// Whether typed input is currently routed to the word field
    fn accepts_input(&self) -> bool {
        self.session().is_some_and(|session| {
            !session.is_over() && !session.is_paused() && !session.current_is_computer()
        })
    }

    pub fn on_char(&mut self, c: char) {
        if !self.accepts_input() {
            return;
        }
        if let Screen::Playing { input, .. } = &mut self.screen {
            if c.is_ascii_alphabetic() {
                input.push(c.to_ascii_lowercase());
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if let Screen::Playing { input, .. } = &mut self.screen {
            input.pop();
        }
    }

    /// Submit the typed word for the current (human) player
    pub fn submit_input(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if let Screen::Playing { session, input } = &mut self.screen {
            if input.is_empty() {
                return;
            }
            let word = std::mem::take(input);
            session.submit_word(self.dict, &word);
        }
        self.reconcile_ai();
    }

    /// Skip the current player's turn (human command)
    pub fn skip(&mut self) {
        if let Screen::Playing { session, .. } = &mut self.screen {
            if session.is_over() || session.current_is_computer() {
                return;
            }
            session.skip_turn(self.dict);
        }
        self.reconcile_ai();
    }

    pub fn toggle_pause(&mut self) {
        if let Screen::Playing { session, .. } = &mut self.screen {
            session.toggle_pause();
        }
        self.reconcile_ai();
    }

    /// Drop a word suggestion for the current player into the feed
    pub fn request_hint(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if let Screen::Playing { session, .. } = &mut self.screen {
            let dict = self.dict;
            let letter = session
                .required_letter()
                .unwrap_or_else(|| ai::opening_letter(&mut rand::rng()));
            match ai::hint(dict, letter, session.difficulty, session.used_words()) {
                Some(word) => session.note(&format!("Hint: try '{}'", word)),
                None => session.note("Hint: no unused words for this letter"),
            }
        }
    }

    /// End the current game now
    pub fn end_game(&mut self) {
        if let Screen::Playing { session, .. } = &mut self.screen {
            session.end();
        }
        self.reconcile_ai();
    }

    /// Restart with the same settings (game-over screen)
    pub fn play_again(&mut self) {
        let config = match &self.screen {
            Screen::Playing { session, .. } => {
                Some((session.mode, session.time_limit, session.difficulty))
            }
            _ => None,
        };
        if let Some((mode, time_limit, difficulty)) = config {
            let mut fresh = Session::new(mode, time_limit, difficulty);
            if mode == GameMode::HumanVsComputer {
                fresh.set_player_name(PlayerId::One, &self.handle);
            }
            self.screen = Screen::Playing {
                session: fresh,
                input: String::new(),
            };
        }
        self.reconcile_ai();
    }

    /// Discard the session and return to setup
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Setup(SetupState::new());
        self.pending_ai = None;
    }

    // --- deferred work ------------------------------------------------

    /// One second of game time
    pub fn tick(&mut self) {
        if let Screen::Playing { session, .. } = &mut self.screen {
            session.tick(self.dict);
        }
        self.reconcile_ai();
    }

    /// Fire the scheduled computer move if it is due and still valid.
    /// Called from the event loop between input polls.
    pub fn poll(&mut self) {
        self.reconcile_ai();

        let epoch = match &self.pending_ai {
            Some(task) if Instant::now() >= task.due => task.epoch,
            _ => return,
        };
        self.pending_ai = None;

        let Screen::Playing { session, .. } = &mut self.screen else {
            return;
        };
        // liveness re-check at fire time, not schedule time
        if epoch != session.epoch() || session.is_paused() || session.is_over() {
            return;
        }

        let dict: &Dictionary = self.dict;
        let letter = session
            .required_letter()
            .unwrap_or_else(|| ai::opening_letter(&mut rand::rng()));

        match ai::choose_move(dict, letter, session.difficulty, session.used_words()) {
            Some(word) => {
                let accepted = session
                    .submit_word(dict, &word)
                    .is_some_and(|verdict| verdict.is_accepted());
                if !accepted {
                    // candidate selection already excludes used words, so
                    // rejects should not recur; retry a few times anyway
                    if self.ai_retries > 0 {
                        self.ai_retries -= 1;
                        self.pending_ai = Some(AiTask {
                            due: Instant::now()
                                + std::time::Duration::from_millis(AI_RETRY_DELAY_MS),
                            epoch: session.epoch(),
                        });
                        return;
                    }
                    let name = session.current_player().name.clone();
                    session.note(&format!("{} couldn't find a word and skipped turn", name));
                    session.skip_turn(dict);
                }
            }
            None => {
                let name = session.current_player().name.clone();
                session.note(&format!("{} couldn't find a word and skipped turn", name));
                session.skip_turn(dict);
            }
        }

        self.reconcile_ai();
    }

    /// Keep the pending computer move consistent with the session: drop
    /// it when stale, schedule one when a live computer turn has none.
    fn reconcile_ai(&mut self) {
        let Screen::Playing { session, .. } = &self.screen else {
            self.pending_ai = None;
            return;
        };

        let live =
            !session.is_over() && !session.is_paused() && session.current_is_computer();

        match &self.pending_ai {
            Some(task) if live && task.epoch == session.epoch() => {}
            _ if live => {
                self.pending_ai = Some(AiTask {
                    due: Instant::now() + session.difficulty.thinking_delay(),
                    epoch: session.epoch(),
                });
                self.ai_retries = AI_RETRY_LIMIT;
            }
            _ => self.pending_ai = None,
        }
    }
}
