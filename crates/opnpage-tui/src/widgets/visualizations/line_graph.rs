//! Time series chart with trend line

use opnpage_app::widget_view::ResolvedWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget};

use super::{take_row, value_line, WEEKDAY_NAMES};
use crate::theme::{styles, Palette};

pub struct LineGraphView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
}

impl<'a> LineGraphView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette) -> Self {
        Self { widget, palette }
    }
}

/// Axis labels for `n` points, cycling Sun..Sat
fn day_labels(n: usize) -> Vec<&'static str> {
    WEEKDAY_NAMES.iter().copied().cycle().take(n).collect()
}

impl Widget for LineGraphView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let metric = self.widget.metric;
        let mut rest = area;

        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(value_line(metric, p)).render(row, buf);
        }
        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(Line::styled(
                format!("Last {} days", metric.history.len()),
                styles::text_muted(p),
            ))
            .render(row, buf);
        }

        if metric.history.is_empty() || rest.height < 2 {
            return;
        }

        let points: Vec<(f64, f64)> = metric
            .history
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();
        let max_x = (points.len().saturating_sub(1)).max(1) as f64;
        let max_y = metric.history_max().max(1.0);

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(p.accent))
            .data(&points);

        let labels = day_labels(points.len());
        let x_labels = match (labels.first(), labels.last()) {
            (Some(first), Some(last)) => vec![*first, *last],
            _ => Vec::new(),
        };

        Chart::new(vec![dataset])
            .style(Style::default().bg(p.card_bg))
            .x_axis(
                Axis::default()
                    .bounds([0.0, max_x])
                    .labels(x_labels)
                    .style(styles::text_muted(p)),
            )
            .y_axis(Axis::default().bounds([0.0, max_y]))
            .render(rest, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{resolved, TestTerminal};
    use crate::theme::palette::DARK;
    use opnpage_core::{Annotations, DataSourceId, VisualizationType};

    #[test]
    fn test_day_labels_cycle_from_sunday() {
        assert_eq!(day_labels(3), vec!["Sun", "Mon", "Tue"]);
        assert_eq!(day_labels(8).last(), Some(&"Sun"));
    }

    #[test]
    fn test_line_graph_subtitle_counts_history() {
        let annotations = Annotations::new();
        let widget = resolved(VisualizationType::LineGraph, DataSourceId::Caffeine, &annotations);
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(LineGraphView::new(&widget, &DARK), term.area());

        assert!(term.buffer_contains("210 mg"));
        assert!(term.buffer_contains("Last 6 days"));
        assert!(term.buffer_contains("Sun"));
        assert!(term.buffer_contains("Fri"));
    }

    #[test]
    fn test_line_graph_with_empty_history_skips_chart() {
        let annotations = Annotations::new();
        let widget = resolved(
            VisualizationType::LineGraph,
            DataSourceId::Other("sleep".into()),
            &annotations,
        );
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(LineGraphView::new(&widget, &DARK), term.area());

        assert!(term.buffer_contains("Last 0 days"));
        assert!(!term.buffer_contains("Sun"));
    }
}
