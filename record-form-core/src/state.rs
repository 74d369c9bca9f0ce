//! Form state and its pure transition function

use record_form_api::Record;
use serde::Serialize;

use crate::error::FormError;

/// Label of the submit button when a new record will be created
pub const ADD_LABEL: &str = "Add Data";
/// Label of the submit button while a record is being edited
pub const UPDATE_LABEL: &str = "Update Data";

/// Snapshot of the record form.
///
/// Values are never mutated in place by callers; every change goes through
/// [`reduce`], which returns the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Records in the order the server returned them, with creates appended.
    pub records: Vec<Record>,
    /// Name field, as typed.
    pub name: String,
    /// Age field, as typed.
    pub age: String,
    /// Record the form is currently editing, if any.
    pub editing: Option<Record>,
    /// Last error to show.
    pub error: Option<FormError>,
    /// True until the first list call resolves.
    pub loading: bool,
}

impl FormState {
    /// Empty form waiting for the initial list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            name: String::new(),
            age: String::new(),
            editing: None,
            error: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Text of the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Message to display for the current error.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Look up a record by id in the local list.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Same records, fields cleared, no edit in progress.
    fn cleared(self) -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            editing: None,
            error: None,
            ..self
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The name field changed
    NameChanged(String),
    /// The age field changed
    AgeChanged(String),
    /// The list call succeeded
    ListLoaded(Vec<Record>),
    /// The server created a record
    Created(Record),
    /// The server updated the record addressed by `id`
    Updated { id: String, record: Record },
    /// The user picked a record to edit
    EditRequested(String),
    /// The server deleted the record with this id
    Deleted(String),
    /// Something went wrong
    Failed(FormError),
    /// Clear the fields and leave edit mode
    Reset,
}

/// Compute the next state.
#[must_use]
pub fn reduce(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::NameChanged(name) => FormState { name, ..state },
        FormEvent::AgeChanged(age) => FormState { age, ..state },
        FormEvent::ListLoaded(records) => FormState {
            records,
            loading: false,
            error: None,
            ..state
        },
        FormEvent::Created(record) => {
            let mut next = state.cleared();
            next.records.push(record);
            next
        }
        FormEvent::Updated { id, record } => {
            let mut next = state.cleared();
            match next.records.iter_mut().find(|r| r.id == id) {
                Some(slot) => *slot = record,
                // Deleted while the PUT was in flight
                None => log::warn!("Updated record {id} is no longer in the list"),
            }
            next
        }
        FormEvent::EditRequested(id) => match state.find(&id).cloned() {
            Some(record) => FormState {
                name: record.name.clone(),
                age: record.age.to_string(),
                editing: Some(record),
                ..state
            },
            None => FormState {
                error: Some(FormError::RecordNotFound(id)),
                ..state
            },
        },
        FormEvent::Deleted(id) => {
            let mut next = state;
            next.records.retain(|r| r.id != id);
            if next.editing.as_ref().is_some_and(|r| r.id == id) {
                next.editing = None;
            }
            next.error = None;
            next
        }
        FormEvent::Failed(error) => FormState {
            loading: if matches!(error, FormError::FetchFailed) {
                false
            } else {
                state.loading
            },
            error: Some(error),
            ..state
        },
        FormEvent::Reset => state.cleared(),
    }
}
