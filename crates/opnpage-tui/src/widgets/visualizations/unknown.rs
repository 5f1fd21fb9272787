//! Placeholder for visualization tags this build cannot draw

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{styles, Palette};

pub struct UnknownView<'a> {
    tag: &'a str,
    palette: &'a Palette,
}

impl<'a> UnknownView<'a> {
    pub fn new(tag: &'a str, palette: &'a Palette) -> Self {
        Self { tag, palette }
    }
}

impl Widget for UnknownView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Line::styled(
            format!("Unknown visualization: {}", self.tag),
            styles::text_muted(self.palette),
        );
        let top = area.y + area.height.saturating_sub(1) / 2;
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(Rect::new(area.x, top, area.width, area.bottom() - top), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_unknown_names_the_tag() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(UnknownView::new("heatmap", &DARK), term.area());

        assert!(term.line_contains(1, "Unknown visualization: heatmap"));
    }
}
