//! Configuration handling for the contact form
//!
//! Values come from `config.json` in the platform config directory and can
//! be overridden per key through `KONTAKT_*` environment variables.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const DEFAULT_CONFIRMATION_MILLIS: u64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing credential `{0}`: set it in config.json or via {1}")]
    MissingCredential(&'static str, &'static str),
}

/// The identifiers the email service needs for every send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
}

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KontaktConfig {
    /// EmailJS service id
    pub service_id: Option<String>,
    /// EmailJS template id
    pub template_id: Option<String>,
    /// EmailJS public key (sent as `user_id`)
    pub public_key: Option<String>,
    /// Optional private access token
    pub access_token: Option<String>,
    /// Override for the send endpoint
    pub endpoint: Option<String>,
    /// How long the confirmation stays visible
    pub confirmation_millis: Option<u64>,
    /// HTTP request timeout
    pub request_timeout_secs: Option<u64>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl KontaktConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("de", "kontakt", "kontakt-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: KontaktConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Write an empty template when no config file exists yet.
    /// Returns the path that was written.
    pub fn write_template_if_missing() -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                Self::default().save_to(&path)?;
                Ok(Some(path))
            }
            _ => Ok(None),
        }
    }

    /// Replace values with non-empty entries from `lookup`
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get("KONTAKT_SERVICE_ID") {
            self.service_id = Some(v);
        }
        if let Some(v) = get("KONTAKT_TEMPLATE_ID") {
            self.template_id = Some(v);
        }
        if let Some(v) = get("KONTAKT_PUBLIC_KEY") {
            self.public_key = Some(v);
        }
        if let Some(v) = get("KONTAKT_ACCESS_TOKEN") {
            self.access_token = Some(v);
        }
        if let Some(v) = get("KONTAKT_ENDPOINT") {
            self.endpoint = Some(v);
        }
    }

    /// The three required identifiers, or the first one missing
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        fn required(
            value: &Option<String>,
            key: &'static str,
            env: &'static str,
        ) -> Result<String, ConfigError> {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ConfigError::MissingCredential(key, env))
        }

        Ok(Credentials {
            service_id: required(&self.service_id, "service_id", "KONTAKT_SERVICE_ID")?,
            template_id: required(&self.template_id, "template_id", "KONTAKT_TEMPLATE_ID")?,
            public_key: required(&self.public_key, "public_key", "KONTAKT_PUBLIC_KEY")?,
            access_token: self.access_token.clone().filter(|v| !v.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn confirmation_duration(&self) -> Duration {
        Duration::from_millis(
            self.confirmation_millis
                .unwrap_or(DEFAULT_CONFIRMATION_MILLIS),
        )
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}
