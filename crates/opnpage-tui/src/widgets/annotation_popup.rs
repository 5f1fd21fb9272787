//! Annotation popup - reading list or free-form notes for one widget

use opnpage_app::annotation_popup::{AnnotationPopupState, AnnotationTarget};
use opnpage_core::MAX_BOOKS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::{styles, Palette};

pub const TOGGLE_LABEL: &str = "Display this information on the dashboard widget";

pub struct AnnotationPopup<'a> {
    state: &'a AnnotationPopupState,
    palette: &'a Palette,
}

impl<'a> AnnotationPopup<'a> {
    pub fn new(state: &'a AnnotationPopupState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::styled(text, styles::value_bold(self.palette))
    }

    fn input_line(&self, index: usize) -> Line<'static> {
        let p = self.palette;
        let focused = self.state.focus == index;
        let value = self.state.inputs.get(index).map(String::as_str).unwrap_or("");

        let marker = if focused {
            Span::styled("▸ ", styles::accent_bold(p))
        } else {
            Span::raw("  ")
        };
        let mut spans = vec![marker];
        if value.is_empty() {
            spans.push(Span::styled(self.state.input_label(index), styles::text_muted(p)));
        } else {
            spans.push(Span::styled(value.to_string(), styles::text_primary(p)));
        }
        if focused {
            spans.push(Span::styled("█", styles::accent(p)));
        }
        Line::from(spans)
    }

    fn toggle_line(&self) -> Line<'static> {
        let p = self.palette;
        let check = if self.state.show_on_widget { "[x]" } else { "[ ]" };
        let style = if self.state.toggle_focused() {
            styles::focused_selected(p)
        } else {
            styles::accent(p)
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(check, style),
            Span::raw(" "),
            Span::styled(TOGGLE_LABEL, styles::text_secondary(p)),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let count = self.state.inputs.len();
        let mut lines = Vec::new();

        let link_heading = match self.state.target {
            AnnotationTarget::Reading => {
                lines.push(self.heading("Last 5 Books Read:"));
                lines.extend((0..MAX_BOOKS.min(count)).map(|i| self.input_line(i)));
                lines.push(Line::default());
                lines.push(self.heading("Top 3 Favorites:"));
                lines.extend((MAX_BOOKS.min(count)..count).map(|i| self.input_line(i)));
                "Goodreads Link:"
            }
            AnnotationTarget::Metric(_) => {
                lines.push(self.heading("Notes:"));
                lines.extend((0..count).map(|i| self.input_line(i)));
                "Account Link:"
            }
        };

        lines.push(Line::default());
        lines.push(self.heading(link_heading));
        lines.push(Line::styled(
            format!("  {}", self.state.link_label()),
            styles::text_muted(p),
        ));
        lines.push(Line::default());
        lines.push(self.toggle_line());
        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled("[Esc] ", styles::keybinding(p)),
                Span::styled("Cancel", styles::text_secondary(p)),
                Span::raw("   "),
                Span::styled("[Enter] ", styles::keybinding(p)),
                Span::styled(" Save ", styles::focused_selected(p)),
            ])
            .right_aligned(),
        );
        lines
    }
}

impl Widget for AnnotationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = self.lines();
        let height = lines.len() as u16 + 4;
        let modal = modal_overlay::open_modal(buf, area, 60, height, p);

        let block = styles::modal_block(p, &self.state.title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let content = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        );
        Paragraph::new(lines).render(content, buf);
    }
}
