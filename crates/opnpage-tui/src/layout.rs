//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, edit-mode toggle and theme indicator
    pub header: Rect,

    /// Widget grid
    pub grid: Rect,

    /// One-line key hints or feedback
    pub status: Rect,
}

/// Split the terminal into header, grid and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Grid
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        grid: chunks[1],
        status: chunks[2],
    }
}
