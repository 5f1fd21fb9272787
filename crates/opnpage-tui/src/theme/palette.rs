//! Color palettes for the light and dark themes.

use ratatui::style::Color;

/// One complete set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,

    // --- Drag feedback ---
    pub drop_target: Color,
    pub dragging: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(245, 245, 240),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(250, 250, 247),
    border_dim: Color::Rgb(200, 200, 196),
    border_active: Color::Rgb(242, 92, 5),
    accent: Color::Rgb(242, 92, 5),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(18, 32, 58),
    text_secondary: Color::Rgb(90, 100, 120),
    text_muted: Color::Rgb(150, 155, 165),
    positive: Color::Rgb(21, 128, 61),
    negative: Color::Rgb(185, 28, 28),
    neutral: Color::Rgb(110, 115, 125),
    drop_target: Color::Rgb(37, 99, 235),
    dragging: Color::Rgb(180, 180, 176),
    shadow: Color::Rgb(215, 215, 210),
};

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(242, 92, 5),
    accent: Color::Rgb(242, 92, 5),
    contrast_fg: Color::Rgb(10, 12, 16),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    positive: Color::Rgb(74, 222, 128),
    negative: Color::Rgb(248, 113, 113),
    neutral: Color::Rgb(125, 133, 144),
    drop_target: Color::Rgb(88, 166, 255),
    dragging: Color::Rgb(56, 62, 72),
    shadow: Color::Rgb(5, 6, 8),
};

/// Palette for the current dark-mode flag
pub fn for_mode(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}
