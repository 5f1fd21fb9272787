//! Vertical bars for the trailing days, labelled by weekday letter

use chrono::NaiveDate;
use opnpage_app::widget_view::ResolvedWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Widget};

use super::{take_row, trailing_days, value_line, weekday_letter};
use crate::theme::{styles, Palette};

pub struct BarChartView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
    today: NaiveDate,
}

impl<'a> BarChartView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette, today: NaiveDate) -> Self {
        Self {
            widget,
            palette,
            today,
        }
    }
}

impl Widget for BarChartView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let metric = self.widget.metric;
        let mut rest = area;

        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(value_line(metric, p)).render(row, buf);
        }

        let count = metric.history.len();
        if count == 0 || rest.height < 2 {
            return;
        }

        let bars: Vec<Bar> = metric
            .normalized_history()
            .into_iter()
            .zip(trailing_days(self.today, count))
            .map(|(value, day)| {
                Bar::default()
                    .value((value * 100.0).round() as u64)
                    .text_value(String::new())
                    .label(Line::from(weekday_letter(day)))
                    .style(Style::default().fg(p.accent))
            })
            .collect();

        let count = count as u16;
        let gap = if rest.width >= count * 3 { 1 } else { 0 };
        let bar_width = (rest.width.saturating_sub(gap * count.saturating_sub(1)) / count).max(1);

        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .max(100)
            .bar_width(bar_width)
            .bar_gap(gap)
            .label_style(styles::text_muted(p))
            .render(rest, buf);
    }
}
