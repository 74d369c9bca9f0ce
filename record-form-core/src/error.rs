//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use record_form_api::ApiError;

/// Errors the record form surfaces to the user.
///
/// Remote failures carry a fixed message. The full [`ApiError`] is logged
/// where it happens.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum FormError {
    /// The initial list load failed
    #[error("There was an error fetching data")]
    FetchFailed,

    /// Create or update failed
    #[error("There was an error saving data")]
    SaveFailed,

    /// Delete failed
    #[error("There was an error deleting data")]
    DeleteFailed,

    /// Local validation rejected the form; nothing was sent
    #[error("{0}")]
    ValidationFailed(ValidationKind),

    /// `edit` was asked for an id that is not in the local list
    #[error("Record not found")]
    RecordNotFound(String),
}

/// Which local check rejected the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationKind {
    /// Name or age is empty or only whitespace
    #[error("Name and age are required")]
    Required,

    /// Age is not a non-negative whole number
    #[error("Age must be a whole number")]
    AgeNotNumber,
}

/// Log a failed remote call at the level its error calls for.
pub(crate) fn log_api_error(operation: &str, error: &ApiError) {
    if error.is_expected() {
        log::warn!("There was an error {operation}: {error}");
    } else {
        log::error!("There was an error {operation}: {error}");
    }
}

/// Core layer Result type alias
pub type FormResult<T> = std::result::Result<T, FormError>;
