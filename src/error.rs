use thiserror::Error;

use crate::wizard::WizardError;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Wizard setup failed: {0}")]
    Wizard(#[from] WizardError),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, SignupError>;
