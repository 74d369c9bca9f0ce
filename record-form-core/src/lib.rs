//! Record Form Core Library
//!
//! State and operations behind a form that lists, creates, edits and deletes
//! name/age records held by a remote collection:
//! - [`FormState`] and the pure [`reduce`] transition
//! - [`plan_submit`] local validation
//! - [`RecordService`] remote calls folded into [`FormEvent`]s
//! - [`RecordForm`] awaiting controller
//!
//! The remote side is abstracted by [`record_form_api::RecordApi`].

pub mod error;
pub mod form;
pub mod services;
pub mod state;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{FormError, FormResult, ValidationKind};
pub use form::RecordForm;
pub use services::RecordService;
pub use state::{reduce, FormEvent, FormState};
pub use validation::{plan_submit, SubmitRequest};
