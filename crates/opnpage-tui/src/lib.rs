//! opnpage-tui - Terminal UI for the opnpage dashboard
//!
//! Renders [`opnpage_app::AppState`] with ratatui, converts crossterm events
//! into messages and drives the TEA loop until the user quits.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
