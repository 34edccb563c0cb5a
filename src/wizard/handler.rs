use tracing::info;

use crate::form::FormValues;

/// Receives the value record once the final step validates
pub trait SubmissionHandler: Send {
    fn submit(&mut self, values: &FormValues);
}

/// Logs the sign-up and keeps the record so it can be reported on exit
#[derive(Debug, Default)]
pub struct LogSubmission {
    submitted: Option<FormValues>,
}

impl LogSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> Option<&FormValues> {
        self.submitted.as_ref()
    }
}

impl SubmissionHandler for LogSubmission {
    fn submit(&mut self, values: &FormValues) {
        info!(
            first_name = %values.first_name,
            framework = ?values.framework,
            email = %values.email,
            "newsletter sign-up submitted"
        );
        self.submitted = Some(values.clone());
    }
}
