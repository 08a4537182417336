//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use finder_domain::TopK;
use finder_sdk::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Where this config was loaded from; `None` means the default location
    #[serde(skip)]
    location: Option<PathBuf>,
}

/// Recommendation service profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Service base address
    pub api_url: String,

    /// Default number of results
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Hard timeout for service requests, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pre-processed test queries (JSON), file path or URL
    #[serde(default = "default_primary_source")]
    pub primary_source: String,

    /// Raw test set (CSV), file path or URL
    #[serde(default = "default_secondary_source")]
    pub secondary_source: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".finder").join("config.toml"))
    }

    /// Load configuration from the default location or create default.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::path()?)
    }

    /// Load configuration from `path`, writing a default file if none exists.
    ///
    /// An existing file is never overwritten; read and parse errors are
    /// returned as is.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        let existed = path.exists();
        let config = Self::load_from(path)?;
        if !existed {
            config.save()?;
        }
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. Later saves go back to the same path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };
        if config.profiles.is_empty() {
            config.profiles = Self::default().profiles;
        }
        config.settings.validate()?;
        config.location = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = match &self.location {
            Some(path) => path.clone(),
            None => Self::path()?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }
}

impl Profile {
    /// The profile's result count, validated
    pub fn top_k(&self) -> Result<TopK> {
        TopK::new(self.top_k).ok_or_else(|| {
            CliError::Config(format!(
                "top_k must be between {} and {}, got {}",
                TopK::MIN,
                TopK::MAX,
                self.top_k
            ))
        })
    }
}

impl Settings {
    /// Reject settings no request could work with
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(CliError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                api_url: "http://localhost:8000".to_string(),
                top_k: default_top_k(),
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            location: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
            timeout_secs: default_timeout_secs(),
            primary_source: default_primary_source(),
            secondary_source: default_secondary_source(),
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_top_k() -> u32 {
    TopK::DEFAULT.get()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_primary_source() -> String {
    "data/test-queries.json".to_string()
}

fn default_secondary_source() -> String {
    "data/test-set.csv".to_string()
}
