//! Widget configuration modal
//!
//! Visualization type and data source lists side by side, the custom label
//! and icon inputs when the `custom` source is selected, then the delete,
//! cancel and save actions.

use opnpage_app::config_modal::{ConfigModalState, ModalField};
use opnpage_core::{list_data_source_options, visualization_options};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::{styles, Palette};

pub const MODAL_TITLE: &str = "Configure Widget";
pub const CUSTOM_LABEL_PROMPT: &str = "Custom Label (e.g., \"Podcasts\", \"Meditation\")";
pub const CUSTOM_ICON_PROMPT: &str = "Icon (emoji)";
const LABEL_PLACEHOLDER: &str = "Enter custom metric name";

const MODAL_WIDTH: u16 = 68;

pub struct ConfigModal<'a> {
    state: &'a ConfigModalState,
    palette: &'a Palette,
}

impl<'a> ConfigModal<'a> {
    pub fn new(state: &'a ConfigModalState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn focused(&self, field: ModalField) -> bool {
        self.state.focus == field
    }

    fn section_header(&self, text: &'static str, field: ModalField) -> Line<'static> {
        let p = self.palette;
        if self.focused(field) {
            Line::styled(format!("▸ {text}"), styles::accent_bold(p))
        } else {
            Line::styled(format!("  {text}"), styles::text_secondary(p))
        }
    }

    /// One list row: radio mark, optional icon, label
    fn option_line(
        &self,
        icon: &str,
        label: &str,
        chosen: bool,
        field: ModalField,
    ) -> Line<'static> {
        let p = self.palette;
        let mark = if chosen { "●" } else { "○" };
        let text = if icon.is_empty() {
            format!(" {mark} {label} ")
        } else {
            format!(" {mark} {icon} {label} ")
        };
        let style = match (chosen, self.focused(field)) {
            (true, true) => styles::focused_selected(p),
            (true, false) => styles::accent_bold(p),
            _ => styles::text_primary(p),
        };
        Line::styled(text, style)
    }

    fn visualization_lines(&self) -> Vec<Line<'static>> {
        let field = ModalField::Visualization;
        let mut lines = vec![self.section_header("Visualization Type", field)];
        let mut description = None;
        for option in visualization_options() {
            let chosen = option.kind == self.state.visualization_type;
            if chosen {
                description = Some(option.description);
            }
            lines.push(self.option_line(option.preview, option.label, chosen, field));
        }
        if let Some(description) = description {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {description}"),
                styles::text_muted(self.palette),
            ));
        }
        lines
    }

    fn data_source_lines(&self) -> Vec<Line<'static>> {
        let field = ModalField::DataSource;
        let mut lines = vec![self.section_header("Data Source", field)];
        for option in list_data_source_options() {
            let chosen = option.id == self.state.data_source;
            lines.push(self.option_line(option.icon, option.label, chosen, field));
        }
        lines
    }

    fn input_lines(
        &self,
        prompt: &'static str,
        value: &str,
        placeholder: &str,
        field: ModalField,
    ) -> [Line<'static>; 2] {
        let p = self.palette;
        let focused = self.focused(field);
        let border = if focused { styles::accent(p) } else { styles::text_muted(p) };
        let mut spans = vec![Span::styled("  ▏", border)];
        if value.is_empty() {
            spans.push(Span::styled(placeholder.to_string(), styles::text_muted(p)));
        } else {
            spans.push(Span::styled(value.to_string(), styles::text_primary(p)));
        }
        if focused {
            spans.push(Span::styled("█", styles::accent(p)));
        }
        [self.section_header(prompt, field), Line::from(spans)]
    }

    fn action_line(&self, width: u16) -> Line<'static> {
        let p = self.palette;
        let delete_style = if self.focused(ModalField::Delete) {
            Style::default().fg(p.contrast_fg).bg(p.negative)
        } else {
            Style::default().fg(p.negative)
        };
        let left = vec![Span::styled(" Delete Widget ", delete_style)];
        let right = vec![
            Span::styled("[Esc] ", styles::keybinding(p)),
            Span::styled("Cancel", styles::text_secondary(p)),
            Span::raw("   "),
            Span::styled("[Enter] ", styles::keybinding(p)),
            Span::styled(" Save Changes ", styles::focused_selected(p)),
        ];
        let used = Line::from(left.clone()).width() + Line::from(right.clone()).width();
        let gap = (width as usize).saturating_sub(used).max(1);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);
        Line::from(spans)
    }

    /// Rows needed inside the border
    fn content_height(&self) -> u16 {
        let sources = list_data_source_options().len();
        let visualizations = visualization_options().len() + 2;
        let lists = 1 + sources.max(visualizations) as u16;
        let custom = if self.state.is_custom() { 5 } else { 0 };
        1 + lists + custom + 1 + 1
    }
}

impl Widget for ConfigModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let height = self.content_height() + 2;
        let modal = modal_overlay::open_modal(buf, area, MODAL_WIDTH, height, p);

        let block = styles::modal_block(p, MODAL_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let list_rows = self.content_height() - 3 - if self.state.is_custom() { 5 } else { 0 };
        let [_, lists, custom, _, actions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(list_rows),
            Constraint::Length(if self.state.is_custom() { 5 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lists);
        Paragraph::new(self.visualization_lines())
            .wrap(Wrap { trim: false })
            .render(left, buf);
        Paragraph::new(self.data_source_lines()).render(right, buf);

        if self.state.is_custom() {
            let mut lines = vec![Line::default()];
            lines.extend(self.input_lines(
                CUSTOM_LABEL_PROMPT,
                &self.state.custom_label,
                LABEL_PLACEHOLDER,
                ModalField::CustomLabel,
            ));
            lines.extend(self.input_lines(
                CUSTOM_ICON_PROMPT,
                &self.state.custom_icon,
                opnpage_core::DEFAULT_CUSTOM_ICON,
                ModalField::CustomIcon,
            ));
            Paragraph::new(lines).render(custom, buf);
        }

        Paragraph::new(self.action_line(actions.width.saturating_sub(2)))
            .alignment(Alignment::Center)
            .render(actions, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use opnpage_core::{DataSourceId, VisualizationType, WidgetDescriptor, WidgetDraft, WidgetId};

    fn modal(source: DataSourceId) -> ConfigModalState {
        ConfigModalState::open(&WidgetDescriptor::from_draft(
            WidgetId::new("widget-1"),
            WidgetDraft::new(VisualizationType::BarChart, source),
        ))
    }

    fn render(state: &ConfigModalState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 30);
        term.render_widget(ConfigModal::new(state, &LIGHT), term.area());
        term
    }

    #[test]
    fn test_modal_lists_both_pickers() {
        let term = render(&modal(DataSourceId::Running));

        assert!(term.buffer_contains(MODAL_TITLE));
        assert!(term.buffer_contains("Visualization Type"));
        assert!(term.buffer_contains("Data Source"));
        assert!(term.buffer_contains("Bar Chart"));
        assert!(term.buffer_contains("Big Number"));
        assert!(term.buffer_contains("Active Days"));
        assert!(term.buffer_contains("Custom Metric"));
        assert!(term.buffer_contains("Vertical bars comparing values"));
        assert!(term.buffer_contains("Delete Widget"));
        assert!(term.buffer_contains("Save Changes"));
        assert!(!term.buffer_contains(CUSTOM_ICON_PROMPT));
    }

    #[test]
    fn test_custom_source_shows_label_and_icon_inputs() {
        let mut state = modal(DataSourceId::Custom);
        state.custom_label = "Podcasts".into();
        let term = render(&state);

        assert!(term.buffer_contains(CUSTOM_LABEL_PROMPT));
        assert!(term.buffer_contains(CUSTOM_ICON_PROMPT));
        assert!(term.buffer_contains("Podcasts"));
    }

    #[test]
    fn test_empty_label_shows_placeholder() {
        let term = render(&modal(DataSourceId::Custom));
        assert!(term.buffer_contains(LABEL_PLACEHOLDER));
    }

    #[test]
    fn test_focused_list_marks_choice() {
        let state = modal(DataSourceId::Running);
        let modal = ConfigModal::new(&state, &LIGHT);

        let line = modal.option_line("", "Bar Chart", true, ModalField::Visualization);
        assert_eq!(line.style.bg, Some(LIGHT.accent));

        let line = modal.option_line("", "Running", true, ModalField::DataSource);
        assert_eq!(line.style.bg, None);
    }
}
