//! Transport to the tutor chat endpoint.
//!
//! `ChatApi` is the seam `ChatClient` talks through; `HttpChatApi` is the
//! reqwest implementation. Calls are instrumented with the endpoint, session
//! and input sizes (never the contents).

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError};
use crate::protocol::{ChatRequest, ChatResponse};
use crate::util::trunc_for_log;

const ERROR_BODY_LOG_MAX: usize = 512;

/// Sends one exchange and returns the server's response.
#[async_trait]
pub trait ChatApi: Send + Sync {
  async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

#[derive(Clone)]
pub struct HttpChatApi {
  client: reqwest::Client,
  endpoint: String,
  user_agent: String,
}

impl HttpChatApi {
  pub fn new(cfg: &ClientConfig) -> Result<Self, ConfigError> {
    let client = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
    Ok(Self {
      client,
      endpoint: cfg.endpoint.clone(),
      user_agent: cfg.user_agent.clone(),
    })
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }
}

#[async_trait]
impl ChatApi for HttpChatApi {
  #[instrument(
    level = "info",
    skip(self, request),
    fields(endpoint = %self.endpoint, session = %request.session_id, q_len = request.question.len(), a_len = request.answer.len())
  )]
  async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
    let start = std::time::Instant::now();
    let res = self.client.post(&self.endpoint)
      .header(USER_AGENT, &self.user_agent)
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json")
      .json(request).send().await?;

    let status = res.status();
    if !status.is_success() {
      let body = res.text().await.unwrap_or_default();
      warn!(target: "tutor_chat", %status, elapsed = ?start.elapsed(), "Tutor endpoint returned an error status");
      return Err(ClientError::Status { status, body: trunc_for_log(&body, ERROR_BODY_LOG_MAX) });
    }

    // Read as bytes first so a non-JSON body is reported as a decode error.
    let bytes = res.bytes().await?;
    let body: ChatResponse = serde_json::from_slice(&bytes)?;
    debug!(
      target: "tutor_chat",
      elapsed = ?start.elapsed(),
      reply_len = body.reply.len(),
      history_len = body.history.len(),
      "Tutor response received"
    );
    Ok(body)
  }
}
