//! Message types for the application (TEA pattern)

use opnpage_core::WidgetId;

use crate::grid::Direction;
use crate::input_key::{InputKey, InputMouse};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer event from terminal
    Mouse(InputMouse),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Close the welcome popup
    DismissWelcome,

    // ─────────────────────────────────────────────────────────
    // Dashboard Messages
    // ─────────────────────────────────────────────────────────
    /// Switch between "Edit Layout" and "Lock Layout"
    ToggleEditMode,

    /// Switch between light and dark palettes
    ToggleDarkMode,

    /// Move the selection with an arrow key
    MoveSelection(Direction),

    /// Select a widget by id
    SelectWidget(WidgetId),

    /// Append a default widget and open its configuration (edit mode)
    AddWidget,

    /// Restore the default layout (edit mode)
    ResetLayout,

    /// Move the selected widget one position earlier or later
    ShiftSelected { forward: bool },

    /// Apply a reorder to the layout store
    ReorderWidgets { from: usize, to: usize },

    // ─────────────────────────────────────────────────────────
    // Keyboard Drag Messages
    // ─────────────────────────────────────────────────────────
    /// Pick up the selected widget
    PickUpWidget,

    /// Move the keyboard drop cursor
    MoveDropCursor(Direction),

    /// Drop the picked-up widget at the cursor
    DropWidget,

    /// Abandon a keyboard or pointer drag
    CancelDrag,

    // ─────────────────────────────────────────────────────────
    // Configuration Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Open the configuration modal for a widget
    OpenConfigModal(WidgetId),

    ConfigModalNextField,
    ConfigModalPrevField,
    ConfigModalSelectNext,
    ConfigModalSelectPrev,
    ConfigModalInput(char),
    ConfigModalBackspace,

    /// Commit the modal's edits to the layout
    ConfigModalSave,

    /// Close the modal without changes
    ConfigModalCancel,

    /// Ask for confirmation before deleting the modal's widget
    RequestDeleteWidget,

    /// Delete confirmed
    ConfirmDeleteWidget(WidgetId),

    /// Delete declined; return to the modal
    CancelDeleteWidget,

    // ─────────────────────────────────────────────────────────
    // Annotation Popup Messages
    // ─────────────────────────────────────────────────────────
    /// Open the annotation popup for a widget
    OpenAnnotationPopup(WidgetId),

    AnnotationNextField,
    AnnotationPrevField,
    AnnotationInput(char),
    AnnotationBackspace,
    AnnotationToggleShow,

    /// Store the popup's draft in the session annotations
    AnnotationSave,

    /// Close the popup without changes
    AnnotationCancel,
}
