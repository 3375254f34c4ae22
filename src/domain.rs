//! Domain models used by the client: the session identifier and the difficulty tag.

use std::fmt;

use uuid::Uuid;

/// Token grouping every exchange of one client lifetime.
/// Generated once, never mutated, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for SessionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Difficulty tag reported by the tutor (free-form, usually "Easy", "Medium" or "Hard").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difficulty(String);

impl Difficulty {
  /// Blank tags count as absent.
  pub fn parse(raw: &str) -> Option<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(Self(trimmed.to_string())) }
  }

  /// Text shown in the difficulty display, e.g. "Difficulty: Hard".
  pub fn label(&self) -> String {
    format!("Difficulty: {}", capitalize(&self.0))
  }

  /// Visual category: the lowercased tag.
  pub fn category(&self) -> String {
    self.0.to_lowercase()
  }
}

/// First char uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn session_ids_are_unique_uuids() {
    let a = SessionId::generate();
    let b = SessionId::generate();
    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
  }

  #[test]
  fn difficulty_label_and_category() {
    let d = Difficulty::parse("Hard").unwrap();
    assert_eq!(d.label(), "Difficulty: Hard");
    assert_eq!(d.category(), "hard");

    let d = Difficulty::parse(" mEDIUM ").unwrap();
    assert_eq!(d.label(), "Difficulty: Medium");
    assert_eq!(d.category(), "medium");
  }

  #[test]
  fn blank_difficulty_is_absent() {
    assert!(Difficulty::parse("").is_none());
    assert!(Difficulty::parse("   ").is_none());
  }

  #[test]
  fn capitalize_handles_empty_and_unicode() {
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("élevé"), "Élevé");
  }
}
