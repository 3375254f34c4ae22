//! Error types. Callers of `submit` never see these; they only reach the log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("server returned HTTP {status}: {body}")]
  Status { status: reqwest::StatusCode, body: String },

  #[error("invalid response body: {0}")]
  Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },

  #[error("invalid endpoint {0:?}: expected an http(s) URL")]
  InvalidEndpoint(String),

  #[error("timeout_secs must be greater than zero")]
  InvalidTimeout,

  #[error("invalid user_agent {0:?}: not a valid header value")]
  InvalidUserAgent(String),

  #[error("failed to build HTTP client: {0}")]
  Http(#[from] reqwest::Error),
}
