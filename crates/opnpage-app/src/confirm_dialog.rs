//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in opnpage-tui's widgets/confirm_dialog.rs.

use opnpage_core::WidgetId;

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Confirmation shown before a widget is removed
    pub fn delete_widget(id: WidgetId, label: &str) -> Self {
        Self::new(
            "Delete widget?",
            format!("Delete this widget? ({label})"),
            vec![
                ("Delete", Message::ConfirmDeleteWidget(id)),
                ("Cancel", Message::CancelDeleteWidget),
            ],
        )
    }

    /// Message of the first (affirmative) option
    pub fn confirm_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }

    /// Message of the last (dismissive) option
    pub fn cancel_message(&self) -> Option<Message> {
        self.options.last().map(|(_, msg)| msg.clone())
    }
}
