//! Configuration for the event listener

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::listener::ListenerConfig;

/// How the `RESULT <n>` length is announced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Announce {
    /// Always announce the fixed literal 2, whatever the body
    #[default]
    Literal,

    /// Announce the byte length of the body
    Computed,
}

impl Announce {
    pub fn length_for(self, body: &str) -> usize {
        match self {
            Announce::Literal => crate::LITERAL_RESULT_LEN,
            Announce::Computed => body.len(),
        }
    }
}

/// Main listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Audit log receiving one timestamp per event
    #[serde(rename = "audit-log")]
    pub audit_log: PathBuf,

    /// Acknowledgment body sent after each event
    #[serde(rename = "result-body")]
    pub result_body: String,

    /// RESULT length announcement mode
    pub announce: Announce,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audit_log: PathBuf::from(crate::DEFAULT_AUDIT_LOG),
            result_body: crate::DEFAULT_RESULT_BODY.to_string(),
            announce: Announce::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: .eventlistener.yml
        let local_config = PathBuf::from(".eventlistener.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User config: ~/.config/eventlistener/eventlistener.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("eventlistener").join("eventlistener.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply the CLI audit log override, if any
    pub fn with_audit_log(mut self, audit_log: Option<PathBuf>) -> Self {
        if let Some(path) = audit_log {
            self.audit_log = path;
        }
        self
    }

    pub fn listener_config(&self) -> ListenerConfig {
        ListenerConfig {
            audit_log: self.audit_log.clone(),
            result_body: self.result_body.clone(),
            announce: self.announce,
        }
    }
}
