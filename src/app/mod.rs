//! Application state and command routing

pub mod screen;
pub mod state;

pub use screen::{Coordinator, Screen};
pub use state::{GameMode, Outcome, PlayerId, Session};
