//! Tutor Chat · terminal client
//!
//! Prompts for a question and its final answer, sends them to the tutor
//! endpoint and prints the step-by-step reply, the difficulty tag and the
//! session history. EOF or Ctrl-C ends the session.
//!
//! Important env variables:
//!   TUTOR_API_URL     : chat endpoint (default "http://localhost:8000/chat")
//!   TUTOR_CONFIG_PATH : path to TOML config (endpoint, timeout_secs, user_agent, overlap)
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

use tokio::io::BufReader;
use tracing::{info, warn};

use tutor_chat::{repl, telemetry, ChatClient, ClientConfig, HttpChatApi, TerminalView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = ClientConfig::from_env()?;
  let api = HttpChatApi::new(&cfg)?;
  info!(target: "tutor_chat", endpoint = %api.endpoint(), timeout_secs = cfg.timeout_secs, "Tutor chat client ready");

  let client = ChatClient::new(api, TerminalView::stdio(), &cfg);
  let end = repl::run(&client, BufReader::new(tokio::io::stdin()), &mut std::io::stdout(), ctrl_c()).await?;

  info!(target: "tutor_chat", session = %client.session(), ?end, "Session ended");
  Ok(())
}

/// Resolves on Ctrl-C; never resolves if the signal cannot be watched.
async fn ctrl_c() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    warn!(target: "tutor_chat", error = %e, "Cannot listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
}
