//! Large, centered number display

use opnpage_app::widget_view::ResolvedWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::footnote_line;
use crate::theme::{styles, Palette};

pub struct BigNumberView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
}

impl<'a> BigNumberView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette) -> Self {
        Self { widget, palette }
    }
}

/// Spread characters apart so the value reads larger
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

impl Widget for BigNumberView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let metric = self.widget.metric;
        let p = self.palette;

        let wide = spaced(metric.value);
        let value = if (wide.width() as u16) < area.width {
            wide
        } else {
            metric.value.to_string()
        };

        let mut lines = vec![Line::styled(
            value,
            styles::value_bold(p).add_modifier(Modifier::UNDERLINED),
        )];
        if !metric.unit.is_empty() {
            lines.push(Line::styled(metric.unit.to_string(), styles::text_secondary(p)));
        }
        if let (Some(badge), Some(trend)) = (metric.delta_badge(), metric.trend()) {
            lines.push(Line::from(Span::styled(badge, styles::trend(p, trend))));
        }
        if let Some(footnote) = footnote_line(self.widget, p) {
            lines.push(footnote);
        }

        let height = (lines.len() as u16).min(area.height);
        let top = area.y + (area.height - height) / 2;
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, top, area.width, height), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{resolved, TestTerminal};
    use crate::theme::palette::LIGHT;
    use opnpage_core::{Annotations, DataSourceId, VisualizationType};

    #[test]
    fn test_spaced_value() {
        assert_eq!(spaced("210"), "2 1 0");
        assert_eq!(spaced("7"), "7");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn test_big_number_centered_with_badge() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::BigNumber, DataSourceId::Caffeine, &annotations);
        let mut term = TestTerminal::with_size(20, 6);

        term.render_widget(BigNumberView::new(&widget, &LIGHT), term.area());

        assert!(term.buffer_contains("2 1 0"));
        assert!(term.buffer_contains("mg"));
        assert!(term.buffer_contains("↓ 8%"));
        assert!(term.buffer_contains("Daily avg"));
        // four lines centered vertically in six rows
        assert!(term.line_contains(1, "2 1 0"));
    }

    #[test]
    fn test_big_number_narrow_area_drops_spacing() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::BigNumber, DataSourceId::Walking, &annotations);
        let mut term = TestTerminal::with_size(8, 4);

        term.render_widget(BigNumberView::new(&widget, &LIGHT), term.area());

        assert!(term.buffer_contains("8,500"));
    }
}
