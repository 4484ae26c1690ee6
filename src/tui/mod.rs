//! Terminal UI: raw-mode terminal management and screen rendering

pub mod terminal;
pub mod ui;

pub use terminal::Tui;
pub use ui::render;
