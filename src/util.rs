//! Small utility helpers used across modules.

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge response bodies. Cuts on a char boundary.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut end = max;
  while !s.is_char_boundary(end) {
    end -= 1;
  }
  format!("{}… ({} bytes total)", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_strings_pass_through() {
    assert_eq!(trunc_for_log("abc", 10), "abc");
  }

  #[test]
  fn long_strings_are_cut() {
    assert_eq!(trunc_for_log("abcdef", 3), "abc… (6 bytes total)");
  }

  #[test]
  fn cut_respects_char_boundaries() {
    // "é" is two bytes; cutting at 1 must back off to 0.
    assert_eq!(trunc_for_log("éa", 1), "… (3 bytes total)");
  }
}
