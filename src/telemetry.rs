//! Logging setup for the terminal client.
//!
//! The conversation owns stdout, so every log line goes to stderr and the
//! default filter stays quiet: warnings from dependencies, info from this
//! crate (session start, submit spans, failures). Set LOG_LEVEL to override
//! it, e.g. "debug" or "warn,tutor_chat=debug,reqwest=trace". LOG_FORMAT=json
//! emits one JSON object per event for piping into a log collector.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn,tutor_chat=info";

pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(true)
    .with_file(true)
    .with_line_number(true);

  match std::env::var("LOG_FORMAT").as_deref() {
    Ok("json") => {
      builder.json().init();
    }
    _ => {
      builder.init();
    }
  }
}
