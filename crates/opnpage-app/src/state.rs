//! Application state (Model in TEA pattern)

use opnpage_core::{Annotations, WidgetDescriptor, WidgetId};

use crate::annotation_popup::AnnotationPopupState;
use crate::config::Settings;
use crate::config_modal::ConfigModalState;
use crate::confirm_dialog::ConfirmDialogState;
use crate::drag::{DragController, KeyboardReorder};
use crate::grid::HitBox;
use crate::layout_store::LayoutStore;
use crate::preferences;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Welcome popup over the dashboard; any key dismisses it
    Welcome,

    /// Dashboard grid
    #[default]
    Normal,

    /// Widget configuration modal
    ConfigModal,

    /// Confirmation dialog (delete widget)
    ConfirmDialog,

    /// Annotation popup for one widget
    Annotation,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Ordered widgets plus their persistence backend
    pub layout: LayoutStore,

    /// Session-only annotations
    pub annotations: Annotations,

    /// Whether the layout can be rearranged
    pub edit_mode: bool,

    /// Index of the selected widget
    pub selected: usize,

    pub dark_mode: bool,

    /// Pointer gesture tracking
    pub drag: DragController,

    /// Keyboard pick-up in progress
    pub keyboard_drag: Option<KeyboardReorder>,

    /// Widget rectangles from the last rendered frame
    pub hit_boxes: Vec<HitBox>,

    /// Configuration modal state
    pub config_modal: Option<ConfigModalState>,

    /// Confirmation dialog state
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Annotation popup state
    pub annotation_popup: Option<AnnotationPopupState>,

    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from a hydrated layout and loaded settings
    pub fn new(layout: LayoutStore, settings: Settings) -> Self {
        let dark_mode = preferences::load_dark_mode(layout.backend(), settings.ui.dark_mode);
        let ui_mode = if settings.behavior.show_welcome {
            UiMode::Welcome
        } else {
            UiMode::Normal
        };

        Self {
            ui_mode,
            phase: AppPhase::Running,
            drag: DragController::new(settings.drag.activation_distance),
            settings,
            layout,
            annotations: Annotations::new(),
            edit_mode: false,
            selected: 0,
            dark_mode,
            keyboard_drag: None,
            hit_boxes: Vec::new(),
            config_modal: None,
            confirm_dialog_state: None,
            annotation_popup: None,
            status_message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        self.layout.widgets()
    }

    pub fn widget_ids(&self) -> Vec<WidgetId> {
        self.widgets().iter().map(|w| w.id.clone()).collect()
    }

    pub fn selected_widget(&self) -> Option<&WidgetDescriptor> {
        self.widgets().get(self.selected)
    }

    /// Select `id` if it is in the layout
    pub fn select(&mut self, id: &WidgetId) {
        if let Some(index) = self.layout.index_of(id) {
            self.selected = index;
        }
    }

    /// Keep the selection inside the layout after removals
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.layout.len().saturating_sub(1));
    }

    /// Index currently highlighted as a drop target, if any
    pub fn drop_target(&self) -> Option<usize> {
        if let Some(reorder) = self.keyboard_drag {
            return Some(reorder.cursor);
        }
        self.drag.hover().and_then(|id| self.layout.index_of(id))
    }

    /// Index of the widget being dragged, if any
    pub fn dragged_index(&self) -> Option<usize> {
        if let Some(reorder) = self.keyboard_drag {
            return Some(reorder.from);
        }
        self.drag.dragged().and_then(|id| self.layout.index_of(id))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Leave any modal surface and return to the dashboard
    pub fn close_overlays(&mut self) {
        self.config_modal = None;
        self.confirm_dialog_state = None;
        self.annotation_popup = None;
        self.ui_mode = UiMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_store::{IdGenerator, LAYOUT_KEY};
    use crate::preferences::DARK_MODE_KEY;
    use crate::storage::MemoryStore;

    fn state_with(store: MemoryStore, settings: Settings) -> AppState {
        let layout = LayoutStore::load_with_ids(Box::new(store), IdGenerator::starting_at(100));
        AppState::new(layout, settings)
    }

    #[test]
    fn test_new_state_shows_welcome() {
        let state = state_with(MemoryStore::new(), Settings::default());
        assert_eq!(state.ui_mode, UiMode::Welcome);
        assert!(!state.edit_mode);
        assert!(!state.dark_mode);
        assert_eq!(state.widgets().len(), 6);
    }

    #[test]
    fn test_welcome_disabled_by_settings() {
        let mut settings = Settings::default();
        settings.behavior.show_welcome = false;
        let state = state_with(MemoryStore::new(), settings);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_stored_dark_mode_beats_config() {
        let mut settings = Settings::default();
        settings.ui.dark_mode = true;
        let state = state_with(MemoryStore::with_entry(DARK_MODE_KEY, "false"), settings.clone());
        assert!(!state.dark_mode);

        let state = state_with(MemoryStore::new(), settings);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_clamp_selection_on_empty_layout() {
        let store = MemoryStore::with_entry(LAYOUT_KEY, "[]");
        let mut state = state_with(store, Settings::default());
        state.selected = 4;
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        assert!(state.selected_widget().is_none());
    }
}
