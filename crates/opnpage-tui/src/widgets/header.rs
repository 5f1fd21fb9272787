//! Header bar - title, edit-mode state and theme indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub const TITLE: &str = "Sample Dashboard";
pub const EDIT_MODE_BANNER: &str = "Edit Mode: Drag to reorder widgets";

pub struct MainHeader<'a> {
    palette: &'a Palette,
    edit_mode: bool,
    dark_mode: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(palette: &'a Palette, edit_mode: bool, dark_mode: bool) -> Self {
        Self {
            palette,
            edit_mode,
            dark_mode,
        }
    }

    fn key_hint(&self, key: &'static str, label: &'static str) -> Vec<Span<'static>> {
        let p = self.palette;
        vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled(key, styles::keybinding(p)),
            Span::styled("] ", styles::text_muted(p)),
            Span::styled(label, styles::text_secondary(p)),
        ]
    }

    fn right_section(&self) -> Line<'static> {
        let mut spans = if self.edit_mode {
            let mut spans = self.key_hint("a", "Add Widget");
            spans.push(Span::raw("  "));
            spans.extend(self.key_hint("e", "Lock Layout"));
            spans
        } else {
            self.key_hint("e", "Edit Layout")
        };
        spans.push(Span::raw("  "));
        spans.extend(self.key_hint("t", if self.dark_mode { "☾ Dark" } else { "☀ Light" }));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.edit_mode);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent(p)),
            Span::raw(" "),
            Span::styled(
                TITLE,
                Style::default()
                    .fg(p.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let title_width = title.width() as u16;

        let banner = self
            .edit_mode
            .then(|| Line::styled(EDIT_MODE_BANNER, styles::accent_bold(p)));
        let banner_width = banner.as_ref().map(|l| l.width() as u16).unwrap_or(0);

        let right = self.right_section();
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right section only when it clears the title
        if title_width + right_width + 2 <= inner.width {
            let right_x = inner.right() - right_width;
            buf.set_line(right_x, inner.y, &right, right_width);

            if let Some(banner) = banner {
                let free = inner.width - title_width - right_width;
                if banner_width + 4 <= free {
                    let banner_x = inner.x + title_width + (free - banner_width) / 2;
                    buf.set_line(banner_x, inner.y, &banner, banner_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_header_locked_layout() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(MainHeader::new(&LIGHT, false, false), term.area());

        assert!(term.line_contains(1, TITLE));
        assert!(term.line_contains(1, "[e] Edit Layout"));
        assert!(term.line_contains(1, "Light"));
        assert!(!term.buffer_contains(EDIT_MODE_BANNER));
        assert!(!term.buffer_contains("Add Widget"));
    }

    #[test]
    fn test_header_edit_mode() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(&DARK, true, true), term.area());

        assert!(term.line_contains(1, EDIT_MODE_BANNER));
        assert!(term.line_contains(1, "[e] Lock Layout"));
        assert!(term.line_contains(1, "[a] Add Widget"));
        assert!(term.line_contains(1, "Dark"));
    }

    #[test]
    fn test_header_narrow_keeps_title_only() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(MainHeader::new(&LIGHT, false, false), term.area());

        assert!(term.line_contains(1, TITLE));
        assert!(!term.buffer_contains("Edit Layout"));
    }
}
