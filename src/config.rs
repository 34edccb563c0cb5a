use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::ui::ThemeMode;

const CONFIG_DIR: &str = "signup-wizard";
const CONFIG_FILE: &str = "signup.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    pub general: GeneralConfig,
    pub theme: ThemeConfig,
    pub form: FormConfig,
    pub celebration: CelebrationConfig,
}

impl SignupConfig {
    /// `<config dir>/signup-wizard/signup.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                info!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: SignupConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub description: String,
    /// Headline of the celebration screen
    pub thank_you: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Be the first to know!".to_string(),
            description: "Sign up for our emails to be the one of the first to receive news and exclusive content".to_string(),
            thank_you: "Thank you!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub first_name_min: usize,
    /// Upper bound for both name fields
    pub name_max: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            first_name_min: 2,
            name_max: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub confetti: bool,
    pub pieces: usize,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            confetti: true,
            pieces: 200,
        }
    }
}
