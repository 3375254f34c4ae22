//! Wire structs for the tutor chat endpoint (serde ready).
//! Keep these in lockstep with the server's request/response models.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, SessionId};

/// Client → server: one exchange.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
  pub session_id: String,
  pub question: String,
  pub answer: String,
}

impl ChatRequest {
  pub fn new(session: &SessionId, question: &str, answer: &str) -> Self {
    Self {
      session_id: session.as_str().to_string(),
      question: question.to_string(),
      answer: answer.to_string(),
    }
  }
}

/// One prior exchange as recorded by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
  pub user: String,
  pub ai: String,
}

/// Server → client: the tutor's reply plus the session history.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
  pub reply: String,
  #[serde(default)]
  pub difficulty: Option<String>,
  pub history: Vec<HistoryEntry>,
}

impl ChatResponse {
  pub fn difficulty(&self) -> Option<Difficulty> {
    self.difficulty.as_deref().and_then(Difficulty::parse)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn request_serializes_expected_fields() {
    let session = SessionId::generate();
    let req = ChatRequest::new(&session, "2+2?", "4");
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v["session_id"], session.as_str());
    assert_eq!(v["question"], "2+2?");
    assert_eq!(v["answer"], "4");
    assert_eq!(v.as_object().unwrap().len(), 3);
  }

  #[test]
  fn response_without_difficulty() {
    let body = r#"{"reply":"Step 1: add.","history":[]}"#;
    let res: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(res.reply, "Step 1: add.");
    assert!(res.difficulty().is_none());
    assert!(res.history.is_empty());
  }

  #[test]
  fn response_with_null_or_blank_difficulty() {
    let res: ChatResponse =
      serde_json::from_str(r#"{"reply":"r","difficulty":null,"history":[]}"#).unwrap();
    assert!(res.difficulty().is_none());
    let res: ChatResponse =
      serde_json::from_str(r#"{"reply":"r","difficulty":"  ","history":[]}"#).unwrap();
    assert!(res.difficulty().is_none());
  }

  #[test]
  fn response_keeps_history_order() {
    let body = r#"{"reply":"r","difficulty":"Easy","history":[{"user":"Q1","ai":"A1"},{"user":"Q2","ai":"A2"}]}"#;
    let res: ChatResponse = serde_json::from_str(body).unwrap();
    assert_eq!(res.history[0], HistoryEntry { user: "Q1".into(), ai: "A1".into() });
    assert_eq!(res.history[1], HistoryEntry { user: "Q2".into(), ai: "A2".into() });
    assert_eq!(res.difficulty().unwrap().category(), "easy");
  }

  #[test]
  fn response_missing_history_is_rejected() {
    assert!(serde_json::from_str::<ChatResponse>(r#"{"reply":"r"}"#).is_err());
  }
}
