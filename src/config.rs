//! Client configuration: endpoint, timeout and overlap policy.
//!
//! Sources, later wins:
//!   1. built-in defaults
//!   2. TOML file at TUTOR_CONFIG_PATH
//!   3. TUTOR_API_URL (endpoint only)

use std::time::Duration;

use reqwest::header::HeaderValue;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// What to do when `submit` is called while a request is still outstanding.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
  /// Both requests run; the later response to arrive wins the display.
  #[default]
  Allow,
  /// The second submit is refused with an alert.
  Reject,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
  pub endpoint: String,
  pub timeout_secs: u64,
  pub user_agent: String,
  pub overlap: OverlapPolicy,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_ENDPOINT.into(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      user_agent: concat!("tutor-chat/", env!("CARGO_PKG_VERSION")).into(),
      overlap: OverlapPolicy::Allow,
    }
  }
}

impl ClientConfig {
  /// Build from TUTOR_CONFIG_PATH and TUTOR_API_URL.
  pub fn from_env() -> Result<Self, ConfigError> {
    let path = std::env::var("TUTOR_CONFIG_PATH").ok();
    let endpoint = std::env::var("TUTOR_API_URL").ok();
    Self::resolve(path.as_deref(), endpoint)
  }

  /// Same as `from_env` with the lookups passed in.
  pub fn resolve(path: Option<&str>, endpoint_override: Option<String>) -> Result<Self, ConfigError> {
    let mut cfg = match path {
      Some(p) => Self::load(p)?,
      None => Self::default(),
    };
    if let Some(ep) = endpoint_override.filter(|s| !s.trim().is_empty()) {
      cfg.endpoint = ep.trim().to_string();
    }
    cfg.validate()?;
    Ok(cfg)
  }

  /// Load from a TOML file. Missing keys take their defaults.
  pub fn load(path: &str) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| {
      error!(target: "tutor_chat", %path, error = %source, "Failed to read TOML config file");
      ConfigError::Read { path: path.to_string(), source }
    })?;
    let cfg = toml::from_str::<ClientConfig>(&s).map_err(|source| {
      error!(target: "tutor_chat", %path, error = %source, "Failed to parse TOML config");
      ConfigError::Parse { path: path.to_string(), source }
    })?;
    info!(target: "tutor_chat", %path, endpoint = %cfg.endpoint, "Loaded client config (TOML)");
    Ok(cfg)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    let ep = self.endpoint.as_str();
    if !(ep.starts_with("http://") || ep.starts_with("https://")) {
      return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
    }
    if self.timeout_secs == 0 {
      return Err(ConfigError::InvalidTimeout);
    }
    if HeaderValue::from_str(&self.user_agent).is_err() {
      return Err(ConfigError::InvalidUserAgent(self.user_agent.clone()));
    }
    Ok(())
  }
}
