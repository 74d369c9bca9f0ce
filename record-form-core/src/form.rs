//! Awaited controller over [`FormState`]

use std::sync::Arc;

use record_form_api::RecordApi;

use crate::services::RecordService;
use crate::state::{reduce, FormEvent, FormState};
use crate::validation::plan_submit;

/// Owns one [`FormState`] and runs each operation to completion.
///
/// Every method ends by reducing exactly one [`FormEvent`]. Callers that must
/// not block on the network should use [`RecordService`] directly and feed
/// the events back through [`RecordForm::apply`].
pub struct RecordForm {
    service: RecordService,
    state: FormState,
}

impl RecordForm {
    #[must_use]
    pub fn new(api: Arc<dyn RecordApi>) -> Self {
        Self {
            service: RecordService::new(api),
            state: FormState::new(),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Reduce an event into the owned state.
    pub fn apply(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Load the list from the server.
    pub async fn list(&mut self) {
        let event = self.service.fetch_records().await;
        self.apply(event);
    }

    /// Create or update from the current fields.
    pub async fn submit(&mut self) {
        let event = match plan_submit(&self.state) {
            Ok(request) => self.service.execute_submit(request).await,
            Err(e) => {
                log::warn!("Submit rejected: {e}");
                FormEvent::Failed(e)
            }
        };
        self.apply(event);
    }

    /// Load a record into the fields. No remote call.
    pub fn edit(&mut self, id: &str) {
        self.apply(FormEvent::EditRequested(id.to_string()));
    }

    pub async fn delete(&mut self, id: &str) {
        let event = self.service.delete_record(id.to_string()).await;
        self.apply(event);
    }

    pub fn reset(&mut self) {
        self.apply(FormEvent::Reset);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.apply(FormEvent::NameChanged(name.into()));
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.apply(FormEvent::AgeChanged(age.into()));
    }
}
