//! Pointer event handling
//!
//! Presses arm the drag controller against the hit boxes of the last rendered
//! frame; releases turn into clicks or reorders.

use crate::drag::DragOutcome;
use crate::grid::hit_test;
use crate::input_key::{InputMouse, MouseAction};
use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

pub fn handle_mouse(state: &mut AppState, event: InputMouse) -> UpdateResult {
    match state.ui_mode {
        UiMode::Welcome if event.action == MouseAction::Down => {
            return UpdateResult::message(Message::DismissWelcome);
        }
        UiMode::Normal => {}
        _ => return UpdateResult::none(),
    }

    // A keyboard pick-up owns the reorder until dropped or cancelled
    if state.keyboard_drag.is_some() {
        return UpdateResult::none();
    }

    let at = event.position();
    match event.action {
        MouseAction::Down => {
            match hit_test(&state.hit_boxes, at.0, at.1).cloned() {
                Some(id) => state.drag.press(id, at, state.edit_mode),
                None => state.drag.cancel(),
            }
            UpdateResult::none()
        }

        MouseAction::Drag => {
            state.drag.motion(at, &state.hit_boxes);
            UpdateResult::none()
        }

        MouseAction::Up => match state.drag.release(at, &state.hit_boxes) {
            DragOutcome::None => UpdateResult::none(),
            DragOutcome::Click(id) if state.edit_mode => {
                UpdateResult::message(Message::SelectWidget(id))
            }
            DragOutcome::Click(id) => UpdateResult::message(Message::OpenAnnotationPopup(id)),
            DragOutcome::Drop { dragged, target } => {
                match (state.layout.index_of(&dragged), state.layout.index_of(&target)) {
                    (Some(from), Some(to)) => {
                        UpdateResult::message(Message::ReorderWidgets { from, to })
                    }
                    _ => UpdateResult::none(),
                }
            }
        },
    }
}
