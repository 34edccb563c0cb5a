mod error;
mod handler;
mod state;
mod step;

pub use error::{Result, WizardError};
pub use handler::{LogSubmission, SubmissionHandler};
pub use state::{Direction, WizardState};
pub use step::{all_fields, newsletter_steps, StepDefinition};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::form::{FieldName, FormModel};

/// Outcome of a wizard operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: usize, to: usize },
    Retreated { from: usize, to: usize },
    Submitted,
    /// Validation failed; errors are on the form
    Rejected,
    Ignored(Ignored),
}

/// Why an operation left the wizard untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    AtLastStep,
    AtFirstStep,
    NotFinalStep,
    AlreadySubmitted,
}

impl Transition {
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Transition::Advanced { .. } | Transition::Retreated { .. } | Transition::Submitted
        )
    }
}

/// Step-by-step form controller.
///
/// Owns the step pointer and gates forward movement on the form's
/// validation. All operations take `&mut self`, so a session can never have
/// two `next`/`submit` attempts in flight at once.
pub struct StepWizard<F: FormModel, H: SubmissionHandler> {
    steps: Vec<StepDefinition>,
    form: F,
    handler: H,
    state: watch::Sender<WizardState>,
}

impl<F: FormModel, H: SubmissionHandler> StepWizard<F, H> {
    pub fn new(steps: Vec<StepDefinition>, form: F, handler: H) -> Result<Self> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        if let Some(idx) = steps.iter().position(|step| step.fields.is_empty()) {
            return Err(WizardError::EmptyStep(idx));
        }

        let (state, _) = watch::channel(WizardState::new(steps.len()));
        Ok(Self {
            steps,
            form,
            handler,
            state,
        })
    }

    pub fn state(&self) -> WizardState {
        *self.state.borrow()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<WizardState> {
        self.state.subscribe()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn current_fields(&self) -> &[FieldName] {
        &self.steps[self.state().current_step].fields
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Validate the current step and move forward if it passes
    pub async fn next(&mut self) -> Transition {
        let state = self.state();
        if state.is_submitted {
            return Transition::Ignored(Ignored::AlreadySubmitted);
        }
        if state.is_last_step() {
            return Transition::Ignored(Ignored::AtLastStep);
        }

        let from = state.current_step;
        let fields = self.steps[from].fields.clone();

        self.state.send_modify(|s| s.pending = true);
        let valid = self.form.validate(&fields).await;

        if !valid {
            self.state.send_modify(|s| s.pending = false);
            debug!(step = from, "next rejected by validation");
            return Transition::Rejected;
        }

        let to = from + 1;
        self.state.send_modify(|s| {
            s.pending = false;
            s.previous_step = from;
            s.current_step = to;
        });
        info!(from, to, "advanced step");
        Transition::Advanced { from, to }
    }

    /// Move back one step without validating
    pub fn prev(&mut self) -> Transition {
        let state = self.state();
        if state.is_submitted {
            return Transition::Ignored(Ignored::AlreadySubmitted);
        }
        if state.is_first_step() {
            return Transition::Ignored(Ignored::AtFirstStep);
        }

        let from = state.current_step;
        let to = from - 1;
        self.state.send_modify(|s| {
            s.previous_step = from;
            s.current_step = to;
        });
        info!(from, to, "went back a step");
        Transition::Retreated { from, to }
    }

    /// Validate every field and hand the values to the submission handler.
    /// Only meaningful on the final step.
    pub async fn submit(&mut self) -> Transition {
        let state = self.state();
        if state.is_submitted {
            return Transition::Ignored(Ignored::AlreadySubmitted);
        }
        if !state.is_last_step() {
            warn!(step = state.current_step, "submit requested before the final step");
            return Transition::Ignored(Ignored::NotFinalStep);
        }

        // Earlier steps may have been edited after they were passed, so the
        // whole form is checked, not only the final step.
        let fields = all_fields(&self.steps);

        self.state.send_modify(|s| s.pending = true);
        let valid = self.form.validate(&fields).await;

        if !valid {
            self.state.send_modify(|s| s.pending = false);
            debug!("submit rejected by validation");
            return Transition::Rejected;
        }

        let values = self.form.values();
        self.handler.submit(&values);
        self.state.send_modify(|s| {
            s.pending = false;
            s.is_submitted = true;
        });
        info!("form submitted");
        Transition::Submitted
    }
}
