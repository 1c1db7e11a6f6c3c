use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Sent,
    Invalid,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct ContactResultViewModel {
    pub outcome: SubmissionOutcome,
    pub endpoint: Option<String>,
    /// Notice shown to the visitor
    pub notice: String,
    pub errors: Vec<FieldErrorViewModel>,
    /// Underlying failure, for diagnostics
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub problem: String,
    pub message: String,
}

impl CreateView for ContactResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::contact::ContactResultView;
        Box::new(ContactResultView::new(self, mode))
    }
}
