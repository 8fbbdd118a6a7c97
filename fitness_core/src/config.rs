//! Configuration file support for fitplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml`.

use crate::session_log::DEFAULT_LOG_FILE;
use crate::{Error, Gender, Person, Result, User};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Default user profile for commands that do not override it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_age")]
    pub age: i32,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,

    #[serde(default)]
    pub gender: Gender,

    #[serde(default = "default_goal")]
    pub goal: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            age: default_age(),
            weight_kg: default_weight_kg(),
            height_cm: default_height_cm(),
            gender: Gender::default(),
            goal: default_goal(),
        }
    }
}

/// Session log configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

// Default value functions
fn default_name() -> String {
    "Unknown".into()
}

fn default_age() -> i32 {
    18
}

fn default_weight_kg() -> f64 {
    70.0
}

fn default_height_cm() -> f64 {
    170.0
}

fn default_goal() -> String {
    "Maintain".into()
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("fitplan").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build the configured user profile
    pub fn user(&self) -> User {
        let profile = &self.profile;
        let person = Person::new(
            profile.name.clone(),
            profile.age,
            profile.weight_kg,
            profile.height_cm,
            profile.gender,
        );
        User::new(person, profile.goal.clone())
    }
}
