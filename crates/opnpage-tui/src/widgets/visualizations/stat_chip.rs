//! Minimal stat: value, signed delta and a small sparkline

use opnpage_app::widget_view::ResolvedWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{render_sparkline, take_row, take_rows};
use crate::theme::{styles, Palette};

pub struct StatChipView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
}

impl<'a> StatChipView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette) -> Self {
        Self { widget, palette }
    }

    fn stat_line(&self) -> Line<'static> {
        let metric = self.widget.metric;
        let p = self.palette;
        let mut spans = vec![Span::styled(metric.value_with_unit(), styles::value_bold(p))];
        if let (Some(delta), Some(trend)) = (metric.signed_delta(), metric.trend()) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(delta, styles::trend(p, trend)));
        }
        Line::from(spans)
    }
}

impl Widget for StatChipView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut rest = area;
        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(self.stat_line()).render(row, buf);
        }
        if let Some(row) = take_rows(&mut rest, 2) {
            render_sparkline(self.widget.metric, self.palette, row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{resolved, TestTerminal};
    use crate::theme::palette::LIGHT;
    use opnpage_core::{Annotations, DataSourceId, VisualizationType};

    #[test]
    fn test_stat_chip_shows_signed_delta() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::StatChip, DataSourceId::Walking, &annotations);
        let mut term = TestTerminal::with_size(24, 3);

        term.render_widget(StatChipView::new(&widget, &LIGHT), term.area());

        assert!(term.line_contains(0, "8,500 steps +12%"));
    }

    #[test]
    fn test_stat_chip_negative_delta() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::StatChip, DataSourceId::Alcohol, &annotations);
        let mut term = TestTerminal::with_size(24, 3);

        term.render_widget(StatChipView::new(&widget, &LIGHT), term.area());

        assert!(term.line_contains(0, "2 drinks -25%"));
    }

    #[test]
    fn test_stat_chip_unit_less_value() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::StatChip, DataSourceId::Custom, &annotations);
        let mut term = TestTerminal::with_size(24, 3);

        term.render_widget(StatChipView::new(&widget, &LIGHT), term.area());

        assert!(term.line_contains(0, "0 0%"));
    }
}
