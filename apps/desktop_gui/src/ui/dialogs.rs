//! Native modal dialogs: one per action outcome, plus the delete confirmation.

use form_core::ConfirmDelete;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use shared::{domain::AccountNumber, error::Notice};

use crate::controller::events::{notice_severity, NoticeSeverity};

#[derive(Debug, Default)]
pub struct NativeDialogs;

impl NativeDialogs {
    pub fn show_notice(&self, notice: &Notice) {
        let level = match notice_severity(notice.kind) {
            NoticeSeverity::Info => MessageLevel::Info,
            NoticeSeverity::Warning => MessageLevel::Warning,
            NoticeSeverity::Error => MessageLevel::Error,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl ConfirmDelete for NativeDialogs {
    fn confirm_delete(&mut self, account_number: &AccountNumber) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm Deletion")
            .set_description(format!(
                "Are you sure you want to delete account {account_number}?"
            ))
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}

/// Shown when the store cannot be opened at startup; the process exits after.
pub fn show_connection_failure(err: &anyhow::Error) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Database Connection Error")
        .set_description(format!(
            "Failed to connect to the database. Please check your connection details.\n\n{err:#}"
        ))
        .set_buttons(MessageButtons::Ok)
        .show();
}
