//! The six visualization renderers plus the unknown-type placeholder
//!
//! Each renderer draws the body of a widget card from a [`ResolvedWidget`];
//! the card itself (border, title, drag styling) lives in `widget_card`.

mod bar_chart;
mod big_number;
mod calendar;
mod line_graph;
mod pill;
mod stat_chip;
mod unknown;

pub use bar_chart::BarChartView;
pub use big_number::BigNumberView;
pub use calendar::CalendarView;
pub use line_graph::LineGraphView;
pub use pill::PillView;
pub use stat_chip::StatChipView;
pub use unknown::UnknownView;

use chrono::{Datelike, Duration, NaiveDate};
use opnpage_app::widget_view::{Renderer, ResolvedWidget, WidgetView};
use opnpage_core::MetricRecord;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Sparkline, Widget};

use crate::theme::{styles, Palette};

/// Full weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One-letter weekday labels, Sunday first
pub const WEEKDAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Renders whichever visualization a [`WidgetView`] resolved to
pub struct Visualization<'a> {
    view: &'a WidgetView<'a>,
    palette: &'a Palette,
    today: NaiveDate,
}

impl<'a> Visualization<'a> {
    pub fn new(view: &'a WidgetView<'a>, palette: &'a Palette, today: NaiveDate) -> Self {
        Self {
            view,
            palette,
            today,
        }
    }
}

impl Widget for Visualization<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let p = self.palette;
        match self.view {
            WidgetView::UnknownVisualization { tag } => UnknownView::new(tag, p).render(area, buf),
            WidgetView::Visualization(widget) => match widget.renderer {
                Renderer::Pill => PillView::new(widget, p).render(area, buf),
                Renderer::LineGraph => LineGraphView::new(widget, p).render(area, buf),
                Renderer::BarChart => BarChartView::new(widget, p, self.today).render(area, buf),
                Renderer::Calendar => CalendarView::new(widget, p, self.today).render(area, buf),
                Renderer::StatChip => StatChipView::new(widget, p).render(area, buf),
                Renderer::BigNumber => BigNumberView::new(widget, p).render(area, buf),
            },
        }
    }
}

/// The `n` dates ending at `today`, oldest first
pub fn trailing_days(today: NaiveDate, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .rev()
        .map(|back| today - Duration::days(back as i64))
        .collect()
}

pub fn weekday_letter(date: NaiveDate) -> &'static str {
    WEEKDAY_LETTERS[date.weekday().num_days_from_sunday() as usize]
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ─────────────────────────────────────────────────────────────────────────────

/// Split the first row off `area`, if any remain
pub(crate) fn take_row(area: &mut Rect) -> Option<Rect> {
    take_rows(area, 1)
}

/// Split up to `n` rows off the top of `area`
pub(crate) fn take_rows(area: &mut Rect, n: u16) -> Option<Rect> {
    if area.height == 0 || n == 0 {
        return None;
    }
    let n = n.min(area.height);
    let row = Rect::new(area.x, area.y, area.width, n);
    area.y += n;
    area.height -= n;
    Some(row)
}

/// `value unit` in bold followed by the arrow delta badge
pub(crate) fn value_line<'a>(metric: &MetricRecord, p: &Palette) -> Line<'a> {
    let mut spans = vec![Span::styled(metric.value.to_string(), styles::value_bold(p))];
    if !metric.unit.is_empty() {
        spans.push(Span::styled(format!(" {}", metric.unit), styles::text_secondary(p)));
    }
    if let (Some(badge), Some(trend)) = (metric.delta_badge(), metric.trend()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(badge, styles::trend(p, trend)));
    }
    Line::from(spans)
}

/// Sparkline of the metric history; empty histories draw nothing
pub(crate) fn render_sparkline(metric: &MetricRecord, p: &Palette, area: Rect, buf: &mut Buffer) {
    if metric.history.is_empty() || area.is_empty() {
        return;
    }
    let data: Vec<u64> = metric
        .normalized_history()
        .iter()
        .map(|v| (v * 100.0).round() as u64)
        .collect();
    Sparkline::default()
        .data(&data)
        .max(100)
        .style(Style::default().fg(p.accent))
        .render(area, buf);
}

pub(crate) fn footnote_line<'a>(widget: &ResolvedWidget<'_>, p: &Palette) -> Option<Line<'a>> {
    widget
        .metric
        .metadata
        .footnote
        .map(|text| Line::styled(text.to_string(), styles::text_muted(p)))
}
