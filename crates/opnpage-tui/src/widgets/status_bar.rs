//! Status bar - feedback message or the key hints for the current mode

use opnpage_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        let state = self.state;
        match state.ui_mode {
            UiMode::Welcome => &[("any key", "Continue")],
            UiMode::ConfigModal => &[
                ("Tab", "Field"),
                ("↑↓", "Choose"),
                ("Enter", "Save"),
                ("Ctrl+D", "Delete"),
                ("Esc", "Cancel"),
            ],
            UiMode::ConfirmDialog => &[("y", "Confirm"), ("n", "Cancel")],
            UiMode::Annotation => &[
                ("Tab", "Field"),
                ("Space", "Toggle"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ],
            UiMode::Normal if state.keyboard_drag.is_some() => &[
                ("←↑↓→", "Move"),
                ("Space", "Drop"),
                ("Esc", "Cancel"),
            ],
            UiMode::Normal if state.edit_mode => &[
                ("←↑↓→", "Select"),
                ("Space", "Pick up"),
                ("<>", "Shift"),
                ("Enter", "Configure"),
                ("a", "Add"),
                ("R", "Reset"),
                ("e", "Lock"),
                ("q", "Quit"),
            ],
            UiMode::Normal => &[
                ("←↑↓→", "Select"),
                ("Enter", "Details"),
                ("e", "Edit"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(p)));
            }
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {label}"), styles::text_secondary(p)));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut line = self.hint_line();

        // Feedback wins on the dashboard; overlays keep their hints
        if self.state.ui_mode == UiMode::Normal && self.state.keyboard_drag.is_none() {
            if let Some(message) = &self.state.status_message {
                line = Line::from(vec![
                    Span::raw(" "),
                    Span::styled("●", styles::accent(p)),
                    Span::raw(" "),
                    Span::styled(message.clone(), styles::text_primary(p)),
                ]);
            }
        }

        Paragraph::new(line)
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);
    }
}
