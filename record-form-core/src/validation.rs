//! Local checks run before anything is sent

use record_form_api::{Age, InvalidAge, RecordPayload};

use crate::error::{FormError, FormResult, ValidationKind};
use crate::state::FormState;

/// What a submit should do once the fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// `POST /`
    Create(RecordPayload),
    /// `PUT /:id`
    Update { id: String, payload: RecordPayload },
}

/// Validate the form and decide between create and update.
///
/// A whitespace-only field counts as empty, so a name of only spaces is
/// rejected. A name with any other character is sent exactly as typed.
pub fn plan_submit(state: &FormState) -> FormResult<SubmitRequest> {
    if state.name.trim().is_empty() || state.age.trim().is_empty() {
        return Err(FormError::ValidationFailed(ValidationKind::Required));
    }

    let age = Age::parse(&state.age).map_err(|e| {
        FormError::ValidationFailed(match e {
            InvalidAge::Empty => ValidationKind::Required,
            InvalidAge::NotANumber => ValidationKind::AgeNotNumber,
        })
    })?;

    let payload = RecordPayload::new(state.name.clone(), age);
    Ok(match &state.editing {
        Some(record) => SubmitRequest::Update {
            id: record.id.clone(),
            payload,
        },
        None => SubmitRequest::Create(payload),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, FormEvent};
    use record_form_api::Record;

    fn with_fields(name: &str, age: &str) -> FormState {
        FormState {
            name: name.to_string(),
            age: age.to_string(),
            ..FormState::new()
        }
    }

    #[test]
    fn empty_fields_are_rejected() {
        for (name, age) in [("", "30"), ("Ana", ""), ("Ana", " \t")] {
            assert_eq!(
                plan_submit(&with_fields(name, age)),
                Err(FormError::ValidationFailed(ValidationKind::Required)),
                "name={name:?} age={age:?}"
            );
        }
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        for age in ["abc", "-1", "3.5", "99999"] {
            assert_eq!(
                plan_submit(&with_fields("Ana", age)),
                Err(FormError::ValidationFailed(ValidationKind::AgeNotNumber)),
                "age={age:?}"
            );
        }
    }

    #[test]
    fn creates_when_not_editing() {
        let req = plan_submit(&with_fields("Ana", " 30 ")).unwrap();
        assert_eq!(
            req,
            SubmitRequest::Create(RecordPayload::new("Ana", Age::Years(30)))
        );
    }

    #[test]
    fn updates_the_edited_record() {
        let state = reduce(
            FormState::new(),
            FormEvent::ListLoaded(vec![Record {
                id: "1".into(),
                name: "Ana".into(),
                age: Age::Years(30),
            }]),
        );
        let state = reduce(state, FormEvent::EditRequested("1".into()));
        let state = reduce(state, FormEvent::AgeChanged("31".into()));

        let req = plan_submit(&state).unwrap();
        assert_eq!(
            req,
            SubmitRequest::Update {
                id: "1".into(),
                payload: RecordPayload::new("Ana", Age::Years(31)),
            }
        );
    }

    #[test]
    fn whitespace_only_name_counts_as_empty() {
        for name in [" ", "   ", "\t"] {
            assert_eq!(
                plan_submit(&with_fields(name, "30")),
                Err(FormError::ValidationFailed(ValidationKind::Required)),
                "name={name:?}"
            );
        }
    }

    #[test]
    fn name_is_sent_as_typed() {
        let req = plan_submit(&with_fields(" Ana ", "30")).unwrap();
        assert_eq!(
            req,
            SubmitRequest::Create(RecordPayload::new(" Ana ", Age::Years(30)))
        );
    }
}
