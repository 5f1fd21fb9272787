//! Compact card: value, delta badge, progress bar, sparkline and footnote
//!
//! When the widget's annotation is flagged "show on widget", its non-empty
//! entries are echoed below the metric.

use opnpage_app::widget_view::ResolvedWidget;
use opnpage_core::AnnotationRef;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget};

use super::{footnote_line, render_sparkline, take_row, take_rows, value_line};
use crate::theme::{styles, Palette};

pub struct PillView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
}

impl<'a> PillView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette) -> Self {
        Self { widget, palette }
    }

    /// Lines echoed from the annotation, empty unless flagged
    fn annotation_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let Some(annotation) = self.widget.annotation.filter(|a| a.show_on_widget()) else {
            return Vec::new();
        };

        let heading = |text: &str| Line::styled(text.to_string(), styles::accent_bold(p));
        let item = |text: &str| Line::from(vec![
            Span::styled(" • ", styles::text_muted(p)),
            Span::styled(text.to_string(), styles::text_primary(p)),
        ]);

        let mut lines = Vec::new();
        match annotation {
            AnnotationRef::Reading(reading) => {
                lines.push(heading("Last 5 Books:"));
                lines.extend(reading.filled_books().map(item));
                lines.push(heading("Top 3 Favorites:"));
                lines.extend(reading.filled_favorites().map(item));
                if reading.link.is_some() {
                    lines.push(Line::styled(
                        "View Goodreads Profile (Account linking under development)",
                        styles::text_muted(p),
                    ));
                }
            }
            AnnotationRef::Notes(notes) => {
                lines.push(heading("Highlights / Notes:"));
                lines.extend(notes.filled_notes().map(item));
                if notes.link.is_some() {
                    lines.push(Line::styled(
                        "View Link (Account linking under development)",
                        styles::text_muted(p),
                    ));
                }
            }
        }
        lines
    }
}

impl Widget for PillView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let metric = self.widget.metric;
        let mut rest = area;

        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(value_line(metric, p))
                .alignment(Alignment::Center)
                .render(row, buf);
        }

        if let Some(progress) = metric.metadata.progress {
            if let Some(row) = take_row(&mut rest) {
                Gauge::default()
                    .ratio(f64::from(progress.min(100)) / 100.0)
                    .gauge_style(Style::default().fg(p.accent).bg(p.border_dim))
                    .label(Span::styled(format!("{progress}%"), styles::value_bold(p)))
                    .render(row, buf);
            }
        }

        let annotation = self.annotation_lines();
        let footnote = footnote_line(self.widget, p);
        let reserved = annotation.len() as u16 + u16::from(footnote.is_some());
        let spark_rows = rest.height.saturating_sub(reserved).min(2);
        if let Some(rows) = take_rows(&mut rest, spark_rows) {
            render_sparkline(metric, p, rows, buf);
        }

        if let Some(line) = footnote {
            if let Some(row) = take_row(&mut rest) {
                Paragraph::new(line)
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
        }

        if !annotation.is_empty() && !rest.is_empty() {
            Paragraph::new(annotation).render(rest, buf);
        }
    }
}
