use folio_core::FieldError;

use crate::presentation::view_models::{
    CommandResultViewModel, ContactResultViewModel, FieldErrorViewModel, Guidance, StatusBadge,
    SubmissionOutcome,
};

/// Notice texts match what the interactive form shows
const SENT_NOTICE: &str = "Thank you! Your message has been sent.";
const FAILED_NOTICE: &str = "Failed to send message. Please try again later.";
const INVALID_NOTICE: &str = "Please fix the highlighted fields.";

pub fn present_contact_sent(endpoint: &str) -> CommandResultViewModel<ContactResultViewModel> {
    CommandResultViewModel::new(ContactResultViewModel {
        outcome: SubmissionOutcome::Sent,
        endpoint: Some(endpoint.to_string()),
        notice: SENT_NOTICE.to_string(),
        errors: Vec::new(),
        reason: None,
    })
    .with_badge(StatusBadge::success("Message sent"))
}

pub fn present_contact_invalid(errors: &[FieldError]) -> CommandResultViewModel<ContactResultViewModel> {
    let errors = errors
        .iter()
        .map(|error| FieldErrorViewModel {
            field: error.field.label().to_string(),
            problem: match error.problem {
                folio_core::FieldProblem::Missing => "missing".to_string(),
                folio_core::FieldProblem::InvalidEmail => "invalid_email".to_string(),
            },
            message: error.to_string(),
        })
        .collect();

    CommandResultViewModel::new(ContactResultViewModel {
        outcome: SubmissionOutcome::Invalid,
        endpoint: None,
        notice: INVALID_NOTICE.to_string(),
        errors,
        reason: None,
    })
    .with_badge(StatusBadge::warning("Message not sent"))
}

pub fn present_contact_failed(
    endpoint: Option<&str>,
    reason: impl Into<String>,
) -> CommandResultViewModel<ContactResultViewModel> {
    let mut result = CommandResultViewModel::new(ContactResultViewModel {
        outcome: SubmissionOutcome::Failed,
        endpoint: endpoint.map(str::to_string),
        notice: FAILED_NOTICE.to_string(),
        errors: Vec::new(),
        reason: Some(reason.into()),
    })
    .with_badge(StatusBadge::error("Message not sent"));

    if endpoint.is_none() {
        result = result.with_suggestion(
            Guidance::new("Set [contact] endpoint in the config file, or pass one")
                .with_command("folio contact --endpoint <url> ..."),
        );
    }
    result
}
