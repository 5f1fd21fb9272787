//! One dashboard tile: bordered card around a visualization

use chrono::NaiveDate;
use opnpage_app::widget_view::{display_identity, resolve_widget};
use opnpage_core::{Annotations, WidgetDescriptor};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::visualizations::Visualization;
use crate::theme::{styles, Palette};

/// Drag handle shown in the card title while the layout is editable
pub const DRAG_HANDLE: &str = "⋮⋮";

/// How a card is emphasised in the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardEmphasis {
    #[default]
    None,
    Selected,
    /// Hovered as a drop target during a drag
    DropTarget,
    /// The card being dragged
    Dragging,
}

pub struct WidgetCard<'a> {
    widget: &'a WidgetDescriptor,
    annotations: &'a Annotations,
    palette: &'a Palette,
    today: NaiveDate,
    edit_mode: bool,
    emphasis: CardEmphasis,
}

impl<'a> WidgetCard<'a> {
    pub fn new(
        widget: &'a WidgetDescriptor,
        annotations: &'a Annotations,
        palette: &'a Palette,
        today: NaiveDate,
    ) -> Self {
        Self {
            widget,
            annotations,
            palette,
            today,
            edit_mode: false,
            emphasis: CardEmphasis::None,
        }
    }

    pub fn edit_mode(mut self, edit_mode: bool) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    pub fn emphasis(mut self, emphasis: CardEmphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    fn border_style(&self) -> Style {
        let p = self.palette;
        match self.emphasis {
            CardEmphasis::None => Style::default().fg(p.border_dim),
            CardEmphasis::Selected => Style::default().fg(p.border_active),
            CardEmphasis::DropTarget => Style::default()
                .fg(p.drop_target)
                .add_modifier(Modifier::BOLD),
            CardEmphasis::Dragging => Style::default().fg(p.dragging),
        }
    }
}

impl Widget for WidgetCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (label, icon) = display_identity(self.widget);

        let title_style = match self.emphasis {
            CardEmphasis::Dragging => Style::default().fg(p.dragging),
            _ => styles::value_bold(p),
        };
        let mut block = styles::glass_block(p, false)
            .border_style(self.border_style())
            .title(Line::from(vec![
                Span::raw(" "),
                Span::raw(icon),
                Span::raw(" "),
                Span::styled(label, title_style),
                Span::raw(" "),
            ]));
        if self.edit_mode {
            block = block.title_top(
                Line::styled(format!(" {DRAG_HANDLE} "), styles::text_muted(p)).right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let view = resolve_widget(self.widget, self.annotations);
        Visualization::new(&view, p, self.today).render(inner, buf);

        if self.emphasis == CardEmphasis::Dragging {
            buf.set_style(inner, Style::default().fg(p.dragging));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use opnpage_core::{DataSourceId, VisualizationType, WidgetDraft, WidgetId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn descriptor(draft: WidgetDraft) -> WidgetDescriptor {
        WidgetDescriptor::from_draft(WidgetId::new("card"), draft)
    }

    #[test]
    fn test_card_title_uses_metric_label() {
        let widget = descriptor(WidgetDraft::new(VisualizationType::Pill, DataSourceId::Gaming));
        let annotations = Annotations::new();
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(WidgetCard::new(&widget, &annotations, &LIGHT, today()), term.area());

        assert!(term.line_contains(0, "Gaming"));
        assert!(term.buffer_contains("12.6 hrs"));
        assert!(!term.line_contains(0, DRAG_HANDLE));
    }

    #[test]
    fn test_custom_label_and_icon_override_title() {
        let widget = descriptor(
            WidgetDraft::new(VisualizationType::Pill, DataSourceId::Custom)
                .with_custom("Podcasts", "🎙"),
        );
        let annotations = Annotations::new();
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(WidgetCard::new(&widget, &annotations, &LIGHT, today()), term.area());

        assert!(term.line_contains(0, "Podcasts"));
        assert!(term.line_contains(0, "🎙"));
        assert!(!term.buffer_contains("Custom Metric"));
    }

    #[test]
    fn test_edit_mode_shows_drag_handle() {
        let widget = descriptor(WidgetDraft::new(VisualizationType::StatChip, DataSourceId::Running));
        let annotations = Annotations::new();
        let mut term = TestTerminal::with_size(30, 6);

        term.render_widget(
            WidgetCard::new(&widget, &annotations, &LIGHT, today()).edit_mode(true),
            term.area(),
        );

        assert!(term.line_contains(0, DRAG_HANDLE));
    }

    #[test]
    fn test_unknown_visualization_placeholder_inside_card() {
        let widget = descriptor(WidgetDraft::new(
            VisualizationType::from_tag("heatmap"),
            DataSourceId::Running,
        ));
        let annotations = Annotations::new();
        let mut term = TestTerminal::with_size(40, 5);

        term.render_widget(WidgetCard::new(&widget, &annotations, &LIGHT, today()), term.area());

        assert!(term.line_contains(0, "Running"));
        assert!(term.buffer_contains("Unknown visualization: heatmap"));
    }

    #[test]
    fn test_drop_target_border_color() {
        let widget = descriptor(WidgetDraft::new(VisualizationType::Pill, DataSourceId::Running));
        let annotations = Annotations::new();
        let mut term = TestTerminal::with_size(30, 8);

        term.render_widget(
            WidgetCard::new(&widget, &annotations, &LIGHT, today())
                .emphasis(CardEmphasis::DropTarget),
            term.area(),
        );

        assert_eq!(term.buffer()[(0, 0)].fg, LIGHT.drop_target);
    }
}
