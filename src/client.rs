//! The submit flow: read inputs, call the tutor, update the view.
//!
//! idle → loading → (displaying-result | idle-with-error)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info, instrument, warn};

use crate::api::ChatApi;
use crate::config::{ClientConfig, OverlapPolicy};
use crate::domain::SessionId;
use crate::protocol::{ChatRequest, ChatResponse};
use crate::view::{ElementId, View};

pub const MISSING_INPUT_ALERT: &str = "Please enter both a question and an answer.";
pub const SERVER_ERROR_ALERT: &str = "Error communicating with the server.";
pub const BUSY_ALERT: &str = "A request is already in progress.";

/// How a `submit` call ended. The visible effects are the real contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// Question or answer blank; nothing sent.
  Invalid,
  /// Refused by the in-flight guard; nothing sent.
  Busy,
  /// Reply rendered.
  Displayed,
  /// Transport or decode failure; displays restored.
  Failed,
}

pub struct ChatClient<A: ChatApi, V: View> {
  api: A,
  view: Mutex<V>,
  session: SessionId,
  overlap: OverlapPolicy,
  in_flight: AtomicBool,
}

impl<A: ChatApi, V: View> ChatClient<A, V> {
  /// New client with a freshly generated session identifier.
  pub fn new(api: A, view: V, cfg: &ClientConfig) -> Self {
    Self::with_session(api, view, SessionId::generate(), cfg.overlap)
  }

  pub fn with_session(api: A, view: V, session: SessionId, overlap: OverlapPolicy) -> Self {
    info!(target: "tutor_chat", %session, ?overlap, "Chat session started");
    Self { api, view: Mutex::new(view), session, overlap, in_flight: AtomicBool::new(false) }
  }

  pub fn session(&self) -> &SessionId {
    &self.session
  }

  /// Lock the view. Never held across an await.
  pub fn view(&self) -> MutexGuard<'_, V> {
    self.view.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn into_view(self) -> V {
    self.view.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Submit the current question/answer pair and render the outcome.
  #[instrument(level = "info", skip(self), fields(session = %self.session))]
  pub async fn submit(&self) -> SubmitOutcome {
    let (question, answer) = {
      let view = self.view();
      (
        view.input(ElementId::Question).trim().to_string(),
        view.input(ElementId::Answer).trim().to_string(),
      )
    };

    if question.is_empty() || answer.is_empty() {
      info!(target: "tutor_chat", q_blank = question.is_empty(), a_blank = answer.is_empty(), "Submit rejected: missing input");
      self.view().alert(MISSING_INPUT_ALERT);
      return SubmitOutcome::Invalid;
    }

    let _guard = match self.overlap {
      OverlapPolicy::Allow => None,
      OverlapPolicy::Reject => match InFlight::acquire(&self.in_flight) {
        Some(g) => Some(g),
        None => {
          warn!(target: "tutor_chat", "Submit rejected: request already in flight");
          self.view().alert(BUSY_ALERT);
          return SubmitOutcome::Busy;
        }
      },
    };

    let (response_was_visible, difficulty_was_visible) = {
      let mut view = self.view();
      let prior = (view.is_visible(ElementId::Response), view.is_visible(ElementId::Difficulty));
      view.set_visible(ElementId::Response, false);
      view.set_visible(ElementId::Difficulty, false);
      view.set_visible(ElementId::Loading, true);
      prior
    };

    let request = ChatRequest::new(&self.session, &question, &answer);
    match self.api.send(&request).await {
      Ok(res) => {
        self.render(&res);
        info!(target: "tutor_chat", history_len = res.history.len(), difficulty = ?res.difficulty, "Reply displayed");
        SubmitOutcome::Displayed
      }
      Err(e) => {
        error!(target: "tutor_chat", error = %e, "Chat request failed");
        let mut view = self.view();
        view.set_visible(ElementId::Loading, false);
        view.restore_visible(ElementId::Response, response_was_visible);
        view.restore_visible(ElementId::Difficulty, difficulty_was_visible);
        view.alert(SERVER_ERROR_ALERT);
        SubmitOutcome::Failed
      }
    }
  }

  fn render(&self, res: &ChatResponse) {
    let mut view = self.view();
    view.set_visible(ElementId::Loading, false);

    view.set_text(ElementId::Response, &res.reply);
    view.set_visible(ElementId::Response, true);

    if let Some(difficulty) = res.difficulty() {
      view.set_text(ElementId::Difficulty, &difficulty.label());
      view.set_category(ElementId::Difficulty, &difficulty.category());
      view.set_visible(ElementId::Difficulty, true);
    }

    view.clear_history();
    for entry in &res.history {
      view.push_history(entry);
    }
  }
}

/// Held while a request is outstanding under `OverlapPolicy::Reject`.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
  fn acquire(flag: &'a AtomicBool) -> Option<Self> {
    flag
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .ok()
      .map(|_| Self(flag))
  }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn in_flight_guard_is_exclusive_and_released_on_drop() {
    let flag = AtomicBool::new(false);
    let first = InFlight::acquire(&flag);
    assert!(first.is_some());
    assert!(InFlight::acquire(&flag).is_none());
    drop(first);
    assert!(InFlight::acquire(&flag).is_some());
  }
}
