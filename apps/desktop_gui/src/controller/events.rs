//! How form actions and their outcomes are presented to the operator.

use form_core::FormAction;
use shared::error::NoticeKind;

pub fn action_label(action: FormAction) -> &'static str {
    match action {
        FormAction::Create => "Insert New Account",
        FormAction::Fetch => "Fetch Details",
        FormAction::Update => "Update Account",
        FormAction::Delete => "Delete Account",
        FormAction::Clear => "Clear Fields",
    }
}

/// Buttons shown in the bottom action row; fetch sits beside the key field.
pub const ACTION_ROW: [FormAction; 4] = [
    FormAction::Create,
    FormAction::Update,
    FormAction::Delete,
    FormAction::Clear,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

pub fn notice_severity(kind: NoticeKind) -> NoticeSeverity {
    match kind {
        NoticeKind::Success => NoticeSeverity::Info,
        NoticeKind::NotFound | NoticeKind::OperationError => NoticeSeverity::Warning,
        NoticeKind::InputError | NoticeKind::DataError => NoticeSeverity::Error,
    }
}
