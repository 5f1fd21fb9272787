//! Semantic style builders over a [`Palette`].

use opnpage_core::Trend;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn value_bold(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Key hints in the status bar and dialogs
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Focused item in a list or form
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Color of a delta badge
pub fn trend(p: &Palette, trend: Trend) -> Style {
    let color = match trend {
        Trend::Up => p.positive,
        Trend::Down => p.negative,
        Trend::Flat => p.neutral,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded card border; active borders use the accent color
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg).fg(p.text_primary))
}
