//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use opnpage_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{styles, Palette};

/// Keys bound to the first and last option
const OPTION_KEYS: [&str; 2] = ["y", "n"];

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
    palette: &'a Palette,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn buttons(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            let key = if i == 0 { OPTION_KEYS[0] } else { OPTION_KEYS[1] };
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("[", styles::text_muted(p)));
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled("] ", styles::text_muted(p)));
            spans.push(Span::styled(label.clone(), styles::text_primary(p)));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = modal_overlay::open_modal(buf, area, 50, 8, p);

        let block = styles::modal_block(p, &self.state.title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text_primary(p))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use opnpage_core::WidgetId;

    #[test]
    fn test_delete_confirmation_renders() {
        let state = ConfirmDialogState::delete_widget(WidgetId::new("widget-2"), "Reading");
        let mut term = TestTerminal::new();

        term.render_widget(ConfirmDialog::new(&state, &DARK), term.area());

        assert!(term.buffer_contains("Delete widget?"));
        assert!(term.buffer_contains("Delete this widget? (Reading)"));
        assert!(term.buffer_contains("[y] Delete"));
        assert!(term.buffer_contains("[n] Cancel"));
    }

    #[test]
    fn test_confirm_dialog_compact_terminal() {
        let state = ConfirmDialogState::delete_widget(WidgetId::new("widget-2"), "Reading");
        let mut term = TestTerminal::compact();

        term.render_widget(ConfirmDialog::new(&state, &DARK), term.area());

        assert!(term.buffer_contains("Delete"));
    }
}
