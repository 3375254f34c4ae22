//! Presentation surface the client drives.
//!
//! Elements are addressed by `ElementId`; `as_str` gives the stable identifier
//! a markup-based surface would use.

use crate::protocol::HistoryEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
  Question,
  Answer,
  Response,
  Difficulty,
  Loading,
  History,
}

impl ElementId {
  pub const ALL: [ElementId; 6] = [
    ElementId::Question,
    ElementId::Answer,
    ElementId::Response,
    ElementId::Difficulty,
    ElementId::Loading,
    ElementId::History,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      ElementId::Question => "question",
      ElementId::Answer => "answer",
      ElementId::Response => "ai-response",
      ElementId::Difficulty => "difficulty",
      ElementId::Loading => "loading",
      ElementId::History => "history-list",
    }
  }
}

/// Everything `ChatClient` needs from a display.
///
/// `alert` is a blocking notification: it returns once the user has been told.
pub trait View: Send {
  /// Current raw value of an input field (`Question` or `Answer`).
  fn input(&self, id: ElementId) -> String;

  fn set_visible(&mut self, id: ElementId, visible: bool);
  fn is_visible(&self, id: ElementId) -> bool;

  /// Put back a visibility saved earlier. Surfaces that draw on show
  /// override this so restored content is not drawn a second time.
  fn restore_visible(&mut self, id: ElementId, visible: bool) {
    self.set_visible(id, visible);
  }

  fn set_text(&mut self, id: ElementId, text: &str);

  /// Visual category (a CSS class in a browser, a colour in a terminal).
  fn set_category(&mut self, id: ElementId, category: &str);

  /// Remove every rendered history entry.
  fn clear_history(&mut self);
  /// Append one entry below the existing ones.
  fn push_history(&mut self, entry: &HistoryEntry);

  fn alert(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn identifiers_are_stable_and_distinct() {
    let ids: HashSet<&str> = ElementId::ALL.iter().map(|e| e.as_str()).collect();
    assert_eq!(ids.len(), ElementId::ALL.len());
    assert_eq!(ElementId::Response.as_str(), "ai-response");
    assert_eq!(ElementId::History.as_str(), "history-list");
  }
}
