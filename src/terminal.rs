//! `View` that renders to a terminal.
//!
//! Rendering is immediate: showing an element prints it, hiding prints nothing.
//! Alerts go to the error writer so they stand out from tutor output.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::protocol::HistoryEntry;
use crate::view::{ElementId, View};

pub struct TerminalView<W: Write, E: Write> {
  out: W,
  err: E,
  inputs: HashMap<ElementId, String>,
  texts: HashMap<ElementId, String>,
  categories: HashMap<ElementId, String>,
  visible: HashSet<ElementId>,
  history_header_pending: bool,
}

impl TerminalView<std::io::Stdout, std::io::Stderr> {
  pub fn stdio() -> Self {
    Self::new(std::io::stdout(), std::io::stderr())
  }
}

impl<W: Write, E: Write> TerminalView<W, E> {
  pub fn new(out: W, err: E) -> Self {
    Self {
      out,
      err,
      inputs: HashMap::new(),
      texts: HashMap::new(),
      categories: HashMap::new(),
      visible: HashSet::new(),
      history_header_pending: false,
    }
  }

  /// Fill an input field, as typing into it would.
  pub fn set_input(&mut self, id: ElementId, value: &str) {
    self.inputs.insert(id, value.to_string());
  }

  pub fn into_writers(self) -> (W, E) {
    (self.out, self.err)
  }

  fn text(&self, id: ElementId) -> &str {
    self.texts.get(&id).map(String::as_str).unwrap_or("")
  }

  fn render(&mut self, id: ElementId) {
    match id {
      ElementId::Loading => {
        let _ = writeln!(self.out, "{}", "… waiting for the tutor".dimmed());
      }
      ElementId::Response => {
        let text = self.text(id).to_string();
        let _ = writeln!(self.out, "\n{}\n", text);
      }
      ElementId::Difficulty => {
        let category = self.categories.get(&id).cloned().unwrap_or_default();
        let label = paint(self.text(id), &category);
        let _ = writeln!(self.out, "[{}]", label);
      }
      ElementId::Question | ElementId::Answer | ElementId::History => {}
    }
    let _ = self.out.flush();
  }
}

/// Colour for a difficulty category; unknown categories stay plain.
fn paint(label: &str, category: &str) -> ColoredString {
  match category {
    "easy" => label.green(),
    "medium" => label.yellow(),
    "hard" => label.red().bold(),
    _ => label.normal(),
  }
}

impl<W: Write + Send, E: Write + Send> View for TerminalView<W, E> {
  fn input(&self, id: ElementId) -> String {
    self.inputs.get(&id).cloned().unwrap_or_default()
  }

  fn set_visible(&mut self, id: ElementId, visible: bool) {
    if !visible {
      self.visible.remove(&id);
    } else if self.visible.insert(id) {
      self.render(id);
    }
  }

  fn is_visible(&self, id: ElementId) -> bool {
    self.visible.contains(&id)
  }

  /// Already on screen from before; only the state changes.
  fn restore_visible(&mut self, id: ElementId, visible: bool) {
    if visible {
      self.visible.insert(id);
    } else {
      self.visible.remove(&id);
    }
  }

  fn set_text(&mut self, id: ElementId, text: &str) {
    self.texts.insert(id, text.to_string());
  }

  fn set_category(&mut self, id: ElementId, category: &str) {
    self.categories.insert(id, category.to_string());
  }

  fn clear_history(&mut self) {
    self.history_header_pending = true;
  }

  fn push_history(&mut self, entry: &HistoryEntry) {
    if self.history_header_pending {
      self.history_header_pending = false;
      let _ = writeln!(self.out, "{}", "History".bold().underline());
    }
    let _ = writeln!(self.out, "  {} {}", "You:".bold(), entry.user);
    let _ = writeln!(self.out, "  {} {}", "AI:".bold(), entry.ai);
    let _ = self.out.flush();
  }

  fn alert(&mut self, message: &str) {
    let _ = writeln!(self.err, "{} {}", "!".red().bold(), message);
    let _ = self.err.flush();
  }
}
