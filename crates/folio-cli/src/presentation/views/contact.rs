use std::fmt;

use crate::presentation::view_models::{ContactResultViewModel, SubmissionOutcome, ViewMode};

pub struct ContactResultView<'a> {
    data: &'a ContactResultViewModel,
    mode: ViewMode,
}

impl<'a> ContactResultView<'a> {
    pub fn new(data: &'a ContactResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ContactResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.notice)?;
        if self.mode == ViewMode::Minimal {
            return Ok(());
        }

        for error in &self.data.errors {
            writeln!(f, "  - {}", error.message)?;
        }

        if self.data.outcome == SubmissionOutcome::Failed
            && let Some(reason) = &self.data.reason
        {
            writeln!(f, "  Reason: {}", reason)?;
        }

        if self.mode == ViewMode::Verbose
            && let Some(endpoint) = &self.data.endpoint
        {
            writeln!(f, "  Endpoint: {}", endpoint)?;
        }
        Ok(())
    }
}
