//! Drag-reorder gesture recognition
//!
//! Pointer gestures go through [`DragController`]: a press arms a pending
//! gesture, movement beyond the activation distance turns it into a drag,
//! and release resolves the drop target from the last frame's hit boxes.
//! A press that is released without crossing the threshold is a click.
//!
//! [`KeyboardReorder`] is the keyboard equivalent: pick up, move a drop
//! cursor, drop.

use opnpage_core::WidgetId;

use crate::grid::{hit_test, HitBox};

/// Pointer position in terminal cells (column, row)
pub type CellPos = (u16, u16);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pressed on a widget, threshold not crossed yet
    Pending {
        id: WidgetId,
        origin: CellPos,
        draggable: bool,
    },
    /// Actively dragging
    Dragging {
        id: WidgetId,
        pointer: CellPos,
        hover: Option<WidgetId>,
    },
}

/// Result of releasing the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Nothing to do
    None,
    /// Press and release without a drag
    Click(WidgetId),
    /// Dragged widget dropped onto a different widget
    Drop { dragged: WidgetId, target: WidgetId },
}

#[derive(Debug, Clone)]
pub struct DragController {
    activation_distance: u16,
    phase: DragPhase,
}

impl DragController {
    pub fn new(activation_distance: u16) -> Self {
        Self {
            activation_distance,
            phase: DragPhase::Idle,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Widget currently being dragged
    pub fn dragged(&self) -> Option<&WidgetId> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Widget currently under the pointer during a drag
    pub fn hover(&self) -> Option<&WidgetId> {
        match &self.phase {
            DragPhase::Dragging { hover, .. } => hover.as_ref(),
            _ => None,
        }
    }

    /// Arm a gesture on `id`; `draggable` is false outside edit mode
    pub fn press(&mut self, id: WidgetId, at: CellPos, draggable: bool) {
        self.phase = DragPhase::Pending {
            id,
            origin: at,
            draggable,
        };
    }

    /// Track pointer movement; returns true when a drag is in progress
    pub fn motion(&mut self, at: CellPos, hit_boxes: &[HitBox]) -> bool {
        let phase = std::mem::take(&mut self.phase);
        self.phase = match phase {
            DragPhase::Pending {
                id,
                origin,
                draggable: true,
            } if self.exceeds_threshold(origin, at) => {
                tracing::debug!("Drag started on {}", id);
                let hover = hover_target(hit_boxes, at, &id);
                DragPhase::Dragging {
                    id,
                    pointer: at,
                    hover,
                }
            }
            DragPhase::Dragging { id, .. } => {
                let hover = hover_target(hit_boxes, at, &id);
                DragPhase::Dragging {
                    id,
                    pointer: at,
                    hover,
                }
            }
            other => other,
        };
        self.is_dragging()
    }

    /// Finish the gesture at `at`
    pub fn release(&mut self, at: CellPos, hit_boxes: &[HitBox]) -> DragOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => DragOutcome::None,
            DragPhase::Pending { id, origin, .. } => {
                if self.exceeds_threshold(origin, at) {
                    DragOutcome::None
                } else {
                    DragOutcome::Click(id)
                }
            }
            DragPhase::Dragging { id, .. } => match hit_test(hit_boxes, at.0, at.1) {
                Some(target) if *target != id => DragOutcome::Drop {
                    dragged: id,
                    target: target.clone(),
                },
                _ => DragOutcome::None,
            },
        }
    }

    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Euclidean distance strictly greater than the activation distance
    fn exceeds_threshold(&self, origin: CellPos, at: CellPos) -> bool {
        let dx = i64::from(at.0) - i64::from(origin.0);
        let dy = i64::from(at.1) - i64::from(origin.1);
        let limit = i64::from(self.activation_distance);
        dx * dx + dy * dy > limit * limit
    }
}

fn hover_target(hit_boxes: &[HitBox], at: CellPos, dragged: &WidgetId) -> Option<WidgetId> {
    hit_test(hit_boxes, at.0, at.1)
        .filter(|id| *id != dragged)
        .cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboard Reorder
// ─────────────────────────────────────────────────────────────────────────────

/// A widget picked up with the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardReorder {
    /// Index the widget was picked up from
    pub from: usize,
    /// Index it will be dropped at
    pub cursor: usize,
}

impl KeyboardReorder {
    pub fn pick_up(index: usize) -> Self {
        Self {
            from: index,
            cursor: index,
        }
    }

    pub fn move_to(&mut self, index: usize) {
        self.cursor = index;
    }

    /// `(from, to)` pair for the layout reorder
    pub fn drop_indices(&self) -> (usize, usize) {
        (self.from, self.cursor)
    }
}
