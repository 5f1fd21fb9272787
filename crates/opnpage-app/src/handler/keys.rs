//! Key event handlers for different UI modes

use crate::config_modal::ModalField;
use crate::grid::Direction;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Welcome => handle_key_welcome(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::ConfigModal => handle_key_config_modal(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::Annotation => handle_key_annotation(state, key),
    }
}

fn arrow_direction(key: &InputKey) -> Option<Direction> {
    match key {
        InputKey::Up => Some(Direction::Up),
        InputKey::Down => Some(Direction::Down),
        InputKey::Left => Some(Direction::Left),
        InputKey::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Any key closes the welcome popup
fn handle_key_welcome(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => Some(Message::DismissWelcome),
    }
}

/// Handle key events on the dashboard
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if matches!(key, InputKey::CharCtrl('c')) {
        return Some(Message::Quit);
    }

    // Keyboard drag in progress: only cursor movement, drop and cancel
    if state.keyboard_drag.is_some() {
        if let Some(direction) = arrow_direction(&key) {
            return Some(Message::MoveDropCursor(direction));
        }
        return match key {
            InputKey::Char(' ') | InputKey::Enter => Some(Message::DropWidget),
            InputKey::Esc => Some(Message::CancelDrag),
            _ => None,
        };
    }

    if let Some(direction) = arrow_direction(&key) {
        return Some(Message::MoveSelection(direction));
    }

    let selected_id = state.selected_widget().map(|w| w.id.clone());

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('e') => Some(Message::ToggleEditMode),
        InputKey::Char('t') => Some(Message::ToggleDarkMode),
        InputKey::Char('n') => selected_id.map(Message::OpenAnnotationPopup),
        InputKey::Home => state.widgets().first().map(|w| Message::SelectWidget(w.id.clone())),
        InputKey::End => state.widgets().last().map(|w| Message::SelectWidget(w.id.clone())),
        InputKey::Esc if state.drag.is_dragging() => Some(Message::CancelDrag),

        // Edit-mode bindings
        InputKey::Char('a') if state.edit_mode => Some(Message::AddWidget),
        InputKey::Char('R') if state.edit_mode => Some(Message::ResetLayout),
        InputKey::Char(' ') if state.edit_mode => Some(Message::PickUpWidget),
        InputKey::Char('<') if state.edit_mode => Some(Message::ShiftSelected { forward: false }),
        InputKey::Char('>') if state.edit_mode => Some(Message::ShiftSelected { forward: true }),
        InputKey::Char('c') | InputKey::Enter if state.edit_mode => {
            selected_id.map(Message::OpenConfigModal)
        }

        // Locked layout: Enter shows the widget's details
        InputKey::Enter => selected_id.map(Message::OpenAnnotationPopup),

        _ => None,
    }
}

/// Handle key events in the widget configuration modal
fn handle_key_config_modal(state: &AppState, key: InputKey) -> Option<Message> {
    let modal = state.config_modal.as_ref()?;
    let on_list = matches!(
        modal.focus,
        ModalField::Visualization | ModalField::DataSource
    );

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('d') => Some(Message::RequestDeleteWidget),
        InputKey::Delete if !modal.is_text_input_focused() => Some(Message::RequestDeleteWidget),
        InputKey::Esc => Some(Message::ConfigModalCancel),
        InputKey::Enter if modal.focus == ModalField::Delete => Some(Message::RequestDeleteWidget),
        InputKey::Enter => Some(Message::ConfigModalSave),
        InputKey::Tab => Some(Message::ConfigModalNextField),
        InputKey::BackTab => Some(Message::ConfigModalPrevField),

        InputKey::Down | InputKey::Right if on_list => Some(Message::ConfigModalSelectNext),
        InputKey::Up | InputKey::Left if on_list => Some(Message::ConfigModalSelectPrev),
        InputKey::Down => Some(Message::ConfigModalNextField),
        InputKey::Up => Some(Message::ConfigModalPrevField),

        InputKey::Backspace => Some(Message::ConfigModalBackspace),
        InputKey::Char(c) if modal.is_text_input_focused() => Some(Message::ConfigModalInput(c)),
        _ => None,
    }
}

/// Handle key events in the confirmation dialog
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog_state.as_ref()?;
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => dialog.confirm_message(),
        InputKey::Char('n' | 'N') | InputKey::Esc => dialog.cancel_message(),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the annotation popup
fn handle_key_annotation(state: &AppState, key: InputKey) -> Option<Message> {
    let on_toggle = state
        .annotation_popup
        .as_ref()
        .is_some_and(|popup| popup.toggle_focused());

    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::AnnotationCancel),
        InputKey::Enter => Some(Message::AnnotationSave),
        InputKey::Tab | InputKey::Down => Some(Message::AnnotationNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::AnnotationPrevField),
        InputKey::Char(' ') if on_toggle => Some(Message::AnnotationToggleShow),
        InputKey::Backspace => Some(Message::AnnotationBackspace),
        InputKey::Char(c) => Some(Message::AnnotationInput(c)),
        _ => None,
    }
}
