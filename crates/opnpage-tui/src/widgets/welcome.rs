//! First-run welcome popup

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::{styles, Palette};

pub const WELCOME_TITLE: &str = "Welcome to the Sample Dashboard!";

pub struct WelcomePopup<'a> {
    palette: &'a Palette,
}

impl<'a> WelcomePopup<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for WelcomePopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = modal_overlay::open_modal(buf, area, 52, 12, p);

        let block = styles::glass_block(p, true).style(Style::default().bg(p.popup_bg));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [title, _, body, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner.inner(Margin::new(2, 1)));

        Paragraph::new(WELCOME_TITLE)
            .style(styles::value_bold(p))
            .alignment(Alignment::Center)
            .render(title, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Try the ", styles::text_secondary(p)),
            Span::styled("Edit Layout", styles::accent_bold(p)),
            Span::styled(
                " button above and see what you can come up with using pregenerated information.",
                styles::text_secondary(p),
            ),
        ]))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .render(body, buf);

        Paragraph::new(Span::styled(
            " Got it! ",
            styles::focused_selected(p).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(button, buf);
    }
}
