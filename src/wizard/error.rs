use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("wizard needs at least one step")]
    NoSteps,

    #[error("step {0} has no fields to validate")]
    EmptyStep(usize),
}

pub type Result<T> = std::result::Result<T, WizardError>;
