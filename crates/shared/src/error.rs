use thiserror::Error;

/// Outcome category of a single form action. Exactly one is reported per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    InputError,
    OperationError,
    NotFound,
    DataError,
}

impl NoticeKind {
    pub fn is_success(self) -> bool {
        self == NoticeKind::Success
    }
}

/// Malformed or missing field text. Raised before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Account Number is required.")]
    MissingAccountNumber,
    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,
    #[error("Invalid balance format. Please enter a number.")]
    InvalidBalance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, "Success", message)
    }

    pub fn not_found(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::NotFound, title, message)
    }

    pub fn operation_error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::OperationError, title, message)
    }

    pub fn data_error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::DataError, "Database Error", message)
    }
}

impl From<InputError> for Notice {
    fn from(value: InputError) -> Self {
        Self::new(NoticeKind::InputError, "Input Error", value.to_string())
    }
}
