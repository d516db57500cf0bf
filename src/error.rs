//! Error types for the Libris core

use thiserror::Error;

/// Application error codes surfaced to the presentation layer alongside the
/// human-readable message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotFound = 2,
    AlreadyExists = 3,
    Duplicate = 4,
    BadValue = 5,
    NoAvailableCopies = 6,
    DataFormat = 7,
    IoFailure = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No available copies: {0}")]
    NoAvailableCopies(String),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Return the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            AppError::DuplicateItem(_) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NoAvailableCopies(_) => ErrorCode::NoAvailableCopies,
            AppError::DataFormat(_) => ErrorCode::DataFormat,
            AppError::Io(_) => ErrorCode::IoFailure,
        }
    }

    /// Whether the caller can recover from this error. DataFormat and I/O
    /// failures during load/save leave no known-good state to continue from.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::DataFormat(_) | AppError::Io(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("{} is invalid", field)),
                }
            }
        }
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
