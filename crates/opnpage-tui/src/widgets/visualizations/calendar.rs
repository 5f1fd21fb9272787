//! Month view with completed days, today highlighted and a legend

use chrono::{Datelike, NaiveDate};
use opnpage_app::widget_view::ResolvedWidget;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{take_row, WEEKDAY_NAMES};
use crate::theme::{styles, Palette};

/// Days of the month shown as completed
pub const COMPLETED_DAYS: [u32; 17] = [1, 3, 5, 7, 8, 10, 12, 14, 15, 17, 19, 21, 23, 24, 26, 28, 30];

/// Width of one day cell
const CELL: usize = 3;

pub struct CalendarView<'a> {
    widget: &'a ResolvedWidget<'a>,
    palette: &'a Palette,
    today: NaiveDate,
}

impl<'a> CalendarView<'a> {
    pub fn new(widget: &'a ResolvedWidget<'a>, palette: &'a Palette, today: NaiveDate) -> Self {
        Self {
            widget,
            palette,
            today,
        }
    }
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Calendar weeks as rows of `Some(day)`, padded with `None`
pub fn month_weeks(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = date.with_day(1).unwrap_or(date);
    let offset = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(date);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

impl CalendarView<'_> {
    fn day_style(&self, day: u32) -> Style {
        let p = self.palette;
        if day == self.today.day() {
            Style::default()
                .fg(p.contrast_fg)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD)
        } else if COMPLETED_DAYS.contains(&day) {
            Style::default().fg(p.positive).add_modifier(Modifier::BOLD)
        } else {
            styles::text_muted(p)
        }
    }

    fn week_line(&self, week: &[Option<u32>; 7]) -> Line<'static> {
        let spans: Vec<Span> = week
            .iter()
            .map(|day| match day {
                Some(day) => Span::styled(format!("{day:>2} "), self.day_style(*day)),
                None => Span::raw(" ".repeat(CELL)),
            })
            .collect();
        Line::from(spans)
    }

    fn legend(&self) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::styled("■", Style::default().fg(p.positive)),
            Span::styled(" Completed ", styles::text_secondary(p)),
            Span::styled("■", styles::text_muted(p)),
            Span::styled(" Not done ", styles::text_secondary(p)),
            Span::styled("■", Style::default().fg(p.accent)),
            Span::styled(" Today", styles::text_secondary(p)),
        ])
    }
}

impl Widget for CalendarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut rest = area;

        let header: String = WEEKDAY_NAMES
            .iter()
            .map(|name| format!("{:<width$}", &name[..2], width = CELL))
            .collect();

        let title = Line::from(vec![
            Span::styled(self.today.format("%B %Y").to_string(), styles::value_bold(p)),
            Span::styled(
                format!("  {}", self.widget.metric.value_with_unit()),
                styles::text_secondary(p),
            ),
        ]);
        let mut lines = vec![Line::styled(header, styles::text_secondary(p))];
        lines.extend(month_weeks(self.today).iter().map(|week| self.week_line(week)));

        if area.height as usize > lines.len() + 1 {
            let row = Rect::new(rest.x, rest.bottom() - 1, rest.width, 1);
            Paragraph::new(self.legend())
                .alignment(Alignment::Center)
                .render(row, buf);
            rest.height -= 1;
        }

        if let Some(row) = take_row(&mut rest) {
            Paragraph::new(title)
                .alignment(Alignment::Center)
                .render(row, buf);
        }

        let width = (CELL * 7) as u16;
        let left = rest.x + rest.width.saturating_sub(width) / 2;
        let grid = Rect::new(left, rest.y, width.min(rest.width), rest.height);
        let mut grid_rest = grid;
        for line in lines {
            let Some(row) = take_row(&mut grid_rest) else {
                break;
            };
            Paragraph::new(line).render(row, buf);
        }
    }
}
