//! Main update function - handles state transitions (TEA pattern)

use opnpage_core::{WidgetDraft, WidgetPatch};
use tracing::debug;

use crate::annotation_popup::AnnotationPopupState;
use crate::config_modal::ConfigModalState;
use crate::confirm_dialog::ConfirmDialogState;
use crate::drag::KeyboardReorder;
use crate::grid::neighbor;
use crate::message::Message;
use crate::preferences;
use crate::state::{AppPhase, AppState, UiMode};
use crate::widget_view::display_identity;

use super::{keys::handle_key, mouse, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            // Feedback lasts until the next key press
            state.status_message = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Mouse(event) => mouse::handle_mouse(state, event),

        Message::Tick => UpdateResult::none(),

        Message::DismissWelcome => {
            if state.ui_mode == UiMode::Welcome {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleEditMode => {
            state.edit_mode = !state.edit_mode;
            if state.edit_mode {
                state.set_status("Editing layout");
            } else {
                cancel_drags(state);
                state.set_status("Layout locked");
            }
            UpdateResult::none()
        }

        Message::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            preferences::save_dark_mode(state.layout.backend_mut(), state.dark_mode);
            UpdateResult::none()
        }

        Message::MoveSelection(direction) => {
            let ids = state.widget_ids();
            state.selected = neighbor(&state.hit_boxes, &ids, state.selected, direction);
            UpdateResult::none()
        }

        Message::SelectWidget(id) => {
            state.select(&id);
            UpdateResult::none()
        }

        Message::AddWidget => {
            if !state.edit_mode {
                return UpdateResult::none();
            }
            let id = state.layout.add(WidgetDraft::default());
            state.select(&id);
            UpdateResult::message(Message::OpenConfigModal(id))
        }

        Message::ResetLayout => {
            if !state.edit_mode {
                return UpdateResult::none();
            }
            cancel_drags(state);
            state.layout.reset();
            state.selected = 0;
            state.set_status("Layout reset to defaults");
            UpdateResult::none()
        }

        Message::ShiftSelected { forward } => {
            if !state.edit_mode || state.layout.is_empty() {
                return UpdateResult::none();
            }
            let from = state.selected;
            let to = if forward {
                from + 1
            } else {
                match from.checked_sub(1) {
                    Some(to) => to,
                    None => return UpdateResult::none(),
                }
            };
            if to >= state.layout.len() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::ReorderWidgets { from, to })
        }

        Message::ReorderWidgets { from, to } => {
            if state.layout.reorder(from, to) {
                state.selected = to;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Keyboard Drag Messages
        // ─────────────────────────────────────────────────────────
        Message::PickUpWidget => {
            if state.edit_mode && state.selected < state.layout.len() {
                state.drag.cancel();
                state.keyboard_drag = Some(KeyboardReorder::pick_up(state.selected));
            }
            UpdateResult::none()
        }

        Message::MoveDropCursor(direction) => {
            let ids = state.widget_ids();
            if let Some(reorder) = state.keyboard_drag.as_mut() {
                let next = neighbor(&state.hit_boxes, &ids, reorder.cursor, direction);
                reorder.move_to(next);
            }
            UpdateResult::none()
        }

        Message::DropWidget => match state.keyboard_drag.take() {
            Some(reorder) => {
                let (from, to) = reorder.drop_indices();
                if from == to {
                    UpdateResult::none()
                } else {
                    UpdateResult::message(Message::ReorderWidgets { from, to })
                }
            }
            None => UpdateResult::none(),
        },

        Message::CancelDrag => {
            cancel_drags(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Configuration Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenConfigModal(id) => {
            let Some(widget) = state.layout.get(&id) else {
                debug!("Cannot configure missing widget {}", id);
                return UpdateResult::none();
            };
            let modal = ConfigModalState::open(widget);
            cancel_drags(state);
            state.select(&id);
            state.config_modal = Some(modal);
            state.ui_mode = UiMode::ConfigModal;
            UpdateResult::none()
        }

        Message::ConfigModalNextField => with_modal(state, ConfigModalState::focus_next),
        Message::ConfigModalPrevField => with_modal(state, ConfigModalState::focus_previous),
        Message::ConfigModalSelectNext => with_modal(state, ConfigModalState::select_next),
        Message::ConfigModalSelectPrev => with_modal(state, ConfigModalState::select_previous),
        Message::ConfigModalInput(c) => with_modal(state, |modal| modal.input_char(c)),
        Message::ConfigModalBackspace => with_modal(state, ConfigModalState::backspace),

        Message::ConfigModalSave => {
            if let Some(modal) = state.config_modal.take() {
                // Unchanged widgets are not rewritten
                if modal.is_dirty()
                    && state
                        .layout
                        .update(modal.widget_id(), &WidgetPatch::replace_with(&modal.commit()))
                {
                    state.set_status("Widget updated");
                }
            }
            state.close_overlays();
            UpdateResult::none()
        }

        Message::ConfigModalCancel => {
            state.close_overlays();
            UpdateResult::none()
        }

        Message::RequestDeleteWidget => {
            let Some(id) = state.config_modal.as_ref().map(|m| m.widget_id().clone()) else {
                return UpdateResult::none();
            };
            let label = state
                .layout
                .get(&id)
                .map(|widget| display_identity(widget).0)
                .unwrap_or_default();
            state.confirm_dialog_state = Some(ConfirmDialogState::delete_widget(id, &label));
            state.ui_mode = UiMode::ConfirmDialog;
            UpdateResult::none()
        }

        Message::ConfirmDeleteWidget(id) => {
            if state.layout.remove(&id).is_some() {
                state.set_status("Widget removed");
            }
            state.close_overlays();
            state.clamp_selection();
            UpdateResult::none()
        }

        Message::CancelDeleteWidget => {
            state.confirm_dialog_state = None;
            state.ui_mode = if state.config_modal.is_some() {
                UiMode::ConfigModal
            } else {
                UiMode::Normal
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Annotation Popup Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenAnnotationPopup(id) => {
            let Some(widget) = state.layout.get(&id) else {
                debug!("Cannot annotate missing widget {}", id);
                return UpdateResult::none();
            };
            let (label, _) = display_identity(widget);
            let popup = AnnotationPopupState::open(&widget.data_source, &label, &state.annotations);
            state.select(&id);
            state.annotation_popup = Some(popup);
            state.ui_mode = UiMode::Annotation;
            UpdateResult::none()
        }

        Message::AnnotationNextField => with_popup(state, AnnotationPopupState::focus_next),
        Message::AnnotationPrevField => with_popup(state, AnnotationPopupState::focus_previous),
        Message::AnnotationInput(c) => with_popup(state, |popup| popup.input_char(c)),
        Message::AnnotationBackspace => with_popup(state, AnnotationPopupState::backspace),
        Message::AnnotationToggleShow => {
            with_popup(state, AnnotationPopupState::toggle_show_on_widget)
        }

        Message::AnnotationSave => {
            if let Some(popup) = state.annotation_popup.take() {
                popup.apply(&mut state.annotations);
                state.set_status("Details saved for this session");
            }
            state.close_overlays();
            UpdateResult::none()
        }

        Message::AnnotationCancel => {
            state.close_overlays();
            UpdateResult::none()
        }
    }
}

fn cancel_drags(state: &mut AppState) {
    state.drag.cancel();
    state.keyboard_drag = None;
}

fn with_modal(state: &mut AppState, f: impl FnOnce(&mut ConfigModalState)) -> UpdateResult {
    if let Some(modal) = state.config_modal.as_mut() {
        f(modal);
    }
    UpdateResult::none()
}

fn with_popup(state: &mut AppState, f: impl FnOnce(&mut AnnotationPopupState)) -> UpdateResult {
    if let Some(popup) = state.annotation_popup.as_mut() {
        f(popup);
    }
    UpdateResult::none()
}
