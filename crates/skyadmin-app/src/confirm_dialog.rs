//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget
//! lives in skyadmin-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    /// The first option is the affirmative one
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

    pub fn quit_confirmation() -> Self {
        Self::new(
            "Quit Skygarden Admin?",
            "Unsaved edits will be lost.",
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelDialog)],
        )
    }

    pub fn save_confirmation(what: &str) -> Self {
        Self::new(
            "Save",
            format!("Save {}?", what),
            vec![("Save", Message::ConfirmSave), ("Cancel", Message::CancelDialog)],
        )
    }

    pub fn delete_confirmation(what: &str) -> Self {
        Self::new(
            "Delete",
            format!("Delete {}? This cannot be undone.", what),
            vec![
                ("Delete", Message::ConfirmDelete),
                ("Cancel", Message::CancelDialog),
            ],
        )
    }

    /// Message sent when the dialog is accepted
    pub fn accept_message(&self) -> Option<Message> {
        self.options.first().map(|(_, msg)| msg.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_is_first_option() {
        let dialog = ConfirmDialogState::delete_confirmation("this template");
        assert!(dialog.message.contains("template"));
        assert!(matches!(dialog.accept_message(), Some(Message::ConfirmDelete)));
    }

    #[test]
    fn test_empty_dialog_has_no_accept() {
        let dialog = ConfirmDialogState::new("t", "m", vec![]);
        assert!(dialog.accept_message().is_none());
    }
}
