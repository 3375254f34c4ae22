//! Tutor chat client library: submit a question/answer pair to the tutor
//! endpoint and render the reply, difficulty tag and session history.
//! The `tutor-chat` binary wires it to a terminal.

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod repl;
pub mod telemetry;
pub mod terminal;
pub mod util;
pub mod view;

pub use api::{ChatApi, HttpChatApi};
pub use client::{ChatClient, SubmitOutcome};
pub use config::{ClientConfig, OverlapPolicy};
pub use domain::{Difficulty, SessionId};
pub use error::{ClientError, ConfigError};
pub use protocol::{ChatRequest, ChatResponse, HistoryEntry};
pub use terminal::TerminalView;
pub use view::{ElementId, View};
