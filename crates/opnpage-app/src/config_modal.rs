//! Widget configuration modal state
//!
//! Edits a copy of one widget's visualization type, data source and, for the
//! `custom` source, its label and icon. Nothing touches the layout until the
//! caller commits the result through `LayoutStore::update`.

use opnpage_core::{
    DataSourceId, VisualizationType, WidgetDescriptor, WidgetId, DEFAULT_CUSTOM_ICON,
};

/// Focusable parts of the modal, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    Visualization,
    DataSource,
    CustomLabel,
    CustomIcon,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModalState {
    original: WidgetDescriptor,
    pub visualization_type: VisualizationType,
    pub data_source: DataSourceId,
    pub custom_label: String,
    pub custom_icon: String,
    pub focus: ModalField,
}

impl ConfigModalState {
    pub fn open(widget: &WidgetDescriptor) -> Self {
        Self {
            original: widget.clone(),
            visualization_type: widget.visualization_type.clone(),
            data_source: widget.data_source.clone(),
            custom_label: widget.custom_label.clone().unwrap_or_default(),
            custom_icon: widget
                .custom_icon
                .clone()
                .unwrap_or_else(|| DEFAULT_CUSTOM_ICON.to_string()),
            focus: ModalField::Visualization,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.original.id
    }

    pub fn is_custom(&self) -> bool {
        self.data_source.is_custom()
    }

    /// Fields reachable with Tab; label and icon only for the custom source
    pub fn fields(&self) -> Vec<ModalField> {
        let mut fields = vec![ModalField::Visualization, ModalField::DataSource];
        if self.is_custom() {
            fields.push(ModalField::CustomLabel);
            fields.push(ModalField::CustomIcon);
        }
        fields.push(ModalField::Delete);
        fields
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_previous(&mut self) {
        let len = self.fields().len();
        self.cycle_focus(len - 1);
    }

    fn cycle_focus(&mut self, step: usize) {
        let fields = self.fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(current + step) % fields.len()];
    }

    /// Step the selection of the focused list
    pub fn select_next(&mut self) {
        self.step_selection(true);
    }

    pub fn select_previous(&mut self) {
        self.step_selection(false);
    }

    fn step_selection(&mut self, forward: bool) {
        match self.focus {
            ModalField::Visualization => {
                let options = &VisualizationType::KNOWN;
                let next = step(
                    options.iter().position(|v| *v == self.visualization_type),
                    options.len(),
                    forward,
                );
                self.visualization_type = options[next].clone();
            }
            ModalField::DataSource => {
                let options = &DataSourceId::KNOWN;
                let next = step(
                    options.iter().position(|s| *s == self.data_source),
                    options.len(),
                    forward,
                );
                self.data_source = options[next].clone();
            }
            _ => {}
        }
    }

    /// Type a character into the focused text input
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            ModalField::CustomLabel => self.custom_label.push(c),
            ModalField::CustomIcon => {
                self.custom_icon = if is_glyph_modifier(c) {
                    first_glyph(&format!("{}{}", self.custom_icon, c))
                } else {
                    c.to_string()
                };
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            ModalField::CustomLabel => {
                self.custom_label.pop();
            }
            ModalField::CustomIcon => self.custom_icon.clear(),
            _ => {}
        }
    }

    pub fn is_text_input_focused(&self) -> bool {
        matches!(self.focus, ModalField::CustomLabel | ModalField::CustomIcon)
    }

    /// Updated descriptor with the same id, size and position
    ///
    /// Custom label and icon are kept only for the `custom` source; a blank
    /// label or icon is stored as absent.
    pub fn commit(&self) -> WidgetDescriptor {
        let mut widget = self.original.clone();
        widget.visualization_type = self.visualization_type.clone();
        widget.data_source = self.data_source.clone();

        if self.is_custom() {
            widget.custom_label = non_blank(&self.custom_label);
            widget.custom_icon = non_blank(&first_glyph(&self.custom_icon));
        } else {
            widget.custom_label = None;
            widget.custom_icon = None;
        }
        widget
    }

    /// True when committing would change the widget
    pub fn is_dirty(&self) -> bool {
        self.commit() != self.original
    }
}

fn step(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Variation selectors and skin-tone modifiers attach to the previous glyph
fn is_glyph_modifier(c: char) -> bool {
    matches!(c, '\u{FE0E}' | '\u{FE0F}' | '\u{1F3FB}'..='\u{1F3FF}')
}

/// First visible glyph of `s`: a base character plus trailing modifiers
pub fn first_glyph(s: &str) -> String {
    let mut chars = s.trim().chars();
    let Some(base) = chars.next() else {
        return String::new();
    };
    let mut glyph = base.to_string();
    glyph.extend(chars.take_while(|c| is_glyph_modifier(*c)));
    glyph
}
