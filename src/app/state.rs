#![allow(dead_code)]
//! Session state: the turn-by-turn state machine for one game
//!
//! Owns the word chain, scores, skip counters, countdown, and pause and
//! game-over flags. Every mutation goes through a command method; the
//! terminal layer only reads snapshots. Deferred work (countdown ticks,
//! delayed computer moves) is validated against the session epoch, which
//! is bumped by any transition that should cancel stale callbacks.

use crate::game::dictionary::Dictionary;
use crate::game::judge::{self, Verdict};
use crate::game::Difficulty;
use std::collections::{HashSet, VecDeque};

/// The game ends when the turn counter reaches this
pub const MAX_TURNS: u32 = 50;

/// Consecutive skips that eliminate a player
pub const SKIP_LIMIT: u32 = 3;

/// History feed keeps only this many entries
pub const HISTORY_CAP: usize = 20;

/// Candidate pool size for the stuck-game probe
const FEASIBILITY_PROBE: usize = 10;

/// Who plays against whom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

impl GameMode {
    /// All modes in display order
    pub fn all() -> &'static [GameMode] {
        &[
            GameMode::HumanVsHuman,
            GameMode::HumanVsComputer,
            GameMode::ComputerVsComputer,
        ]
    }

    /// Display label for this mode
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }
}

/// One of the two seats in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// A player's name, running score, and controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub is_computer: bool,
}

impl Player {
    fn new(name: &str, is_computer: bool) -> Self {
        Self {
            name: name.to_string(),
            score: 0,
            is_computer,
        }
    }
}

/// An accepted word in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub word: String,
    pub player: PlayerId,
    pub score: u32,
}

/// Final result once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Category of a history feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Rejection,
}

/// One line in the history feed, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

/// Mutable state for one game in progress
pub struct Session {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Seconds per turn, 0 for unlimited
    pub time_limit: u32,
    players: [Player; 2],
    current: PlayerId,
    chain: Vec<ChainEntry>,
    used_words: HashSet<String>,
    time_remaining: u32,
    paused: bool,
    game_over: bool,
    turn_count: u32,
    skip_count: [u32; 2],
    epoch: u64,
    history: VecDeque<LogEntry>,
}

impl Session {
    /// Start a fresh game. Player names and controllers follow the mode.
    pub fn new(mode: GameMode, time_limit: u32, difficulty: Difficulty) -> Self {
        let players = match mode {
            GameMode::HumanVsHuman => [Player::new("Player 1", false), Player::new("Player 2", false)],
            GameMode::HumanVsComputer => [Player::new("Player", false), Player::new("AI", true)],
            GameMode::ComputerVsComputer => {
                [Player::new("AI Player 1", true), Player::new("AI Player 2", true)]
            }
        };

        Self {
            mode,
            difficulty,
            time_limit,
            players,
            current: PlayerId::One,
            chain: Vec::new(),
            used_words: HashSet::new(),
            time_remaining: time_limit,
            paused: false,
            game_over: false,
            turn_count: 0,
            skip_count: [0, 0],
            epoch: 0,
            history: VecDeque::new(),
        }
    }

    /// Rename a seat (used to apply the local handle)
    pub fn set_player_name(&mut self, id: PlayerId, name: &str) {
        self.players[id.index()].name = name.to_string();
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn current(&self) -> PlayerId {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_is_computer(&self) -> bool {
        self.current_player().is_computer
    }

    pub fn chain(&self) -> &[ChainEntry] {
        &self.chain
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn skip_count(&self, id: PlayerId) -> u32 {
        self.skip_count[id.index()]
    }

    /// Scheduling epoch. Bumped on pause/resume, on game over, and on
    /// every turn advance; deferred callbacks compare it at fire time
    /// and no-op when stale.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// History feed, newest entry first
    pub fn history(&self) -> &VecDeque<LogEntry> {
        &self.history
    }

    /// Letter the next word must start with, or None for the first move
    pub fn required_letter(&self) -> Option<char> {
        self.chain
            .last()
            .and_then(|entry| entry.word.chars().last())
    }

    /// Winner by strict score comparison, once the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        let p1 = self.players[0].score;
        let p2 = self.players[1].score;
        Some(if p1 > p2 {
            Outcome::Winner(PlayerId::One)
        } else if p2 > p1 {
            Outcome::Winner(PlayerId::Two)
        } else {
            Outcome::Tie
        })
    }

    /// Submit a word for the current player. Returns None while paused
    /// or after game over; otherwise the verdict. An accepted word
    /// advances the turn, a rejected word leaves it with the same player.
    pub fn submit_word(&mut self, dict: &Dictionary, raw: &str) -> Option<Verdict> {
        if self.game_over || self.paused {
            return None;
        }

        let previous = self
            .chain
            .last()
            .map(|entry| entry.word.clone())
            .unwrap_or_default();
        let verdict = judge::judge(dict, raw, &previous, &self.used_words);

        match &verdict {
            Verdict::Accepted { score } => {
                let word = raw.trim().to_lowercase();
                let player = self.current;
                self.chain.push(ChainEntry {
                    word: word.clone(),
                    player,
                    score: *score,
                });
                self.used_words.insert(word.clone());
                self.players[player.index()].score += score;
                self.skip_count[player.index()] = 0;
                self.log(
                    format!(
                        "{}: {} (+{} points)",
                        self.players[player.index()].name, word, score
                    ),
                    LogKind::Info,
                );
                self.advance_turn(dict);
            }
            rejection => {
                self.log(rejection.message(), LogKind::Rejection);
            }
        }

        Some(verdict)
    }

    /// Skip the current player's turn, explicitly or via timeout.
    /// Three consecutive skips end the game on the spot; the outcome is
    /// still decided purely by score comparison.
    pub fn skip_turn(&mut self, dict: &Dictionary) {
        if self.game_over {
            return;
        }

        let player = self.current;
        self.skip_count[player.index()] += 1;
        self.log(
            format!("{} skipped their turn", self.players[player.index()].name),
            LogKind::Info,
        );

        if self.skip_count[player.index()] >= SKIP_LIMIT {
            self.log(
                format!(
                    "{} has skipped {} turns and loses!",
                    self.players[player.index()].name,
                    SKIP_LIMIT
                ),
                LogKind::Info,
            );
            self.finish();
            return;
        }

        self.advance_turn(dict);
    }

    /// One second of countdown. A no-op while paused, after game over,
    /// or when the time limit is 0 (unlimited). Hitting zero counts as a
    /// skip for the current player.
    pub fn tick(&mut self, dict: &Dictionary) {
        if self.paused || self.game_over || self.time_limit == 0 {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.log(
                format!("{} ran out of time!", self.current_player().name),
                LogKind::Info,
            );
            self.skip_turn(dict);
        }
    }

    /// Pause or resume. Does not reset the countdown; only suspends
    /// ticks and deferred computer moves.
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        self.epoch += 1;
        let message = if self.paused { "Game paused" } else { "Game resumed" };
        self.log(message.to_string(), LogKind::Info);
    }

    /// End the game now (manual end command)
    pub fn end(&mut self) {
        if !self.game_over {
            self.finish();
        }
    }

    /// Record a note in the history feed (computer player events)
    pub fn note(&mut self, message: &str) {
        self.log(message.to_string(), LogKind::Info);
    }

    /// Hand the turn to the opponent and re-check end conditions
    fn advance_turn(&mut self, dict: &Dictionary) {
        self.current = self.current.opponent();
        self.time_remaining = self.time_limit;
        self.turn_count += 1;
        self.epoch += 1;

        if self.should_end(dict) {
            self.finish();
        }
    }

    /// End-of-game detection: the turn cap, or no unused word exists for
    /// the required letter even under the most permissive policy. The
    /// probe deliberately uses the easy filter regardless of the
    /// configured difficulty.
    fn should_end(&self, dict: &Dictionary) -> bool {
        if self.turn_count >= MAX_TURNS {
            return true;
        }

        if let Some(letter) = self.required_letter() {
            let probe = dict.words_starting_with(letter, Difficulty::Easy, FEASIBILITY_PROBE);
            if probe.iter().all(|word| self.used_words.contains(word)) {
                return true;
            }
        }

        false
    }

    fn finish(&mut self) {
        self.game_over = true;
        self.epoch += 1;
    }

    fn log(&mut self, message: String, kind: LogKind) {
        self.history.push_front(LogEntry { message, kind });
        self.history.truncate(HISTORY_CAP);
    }
}
