//! HTML tag formatting for resolved asset paths.

use std::fmt;

/// Pre-rendered, trusted HTML. Template hosts must emit it without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
  /// Borrow the HTML text.
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Take ownership of the HTML text.
  pub fn into_string(self) -> String {
    self.0
  }
}

impl fmt::Display for Markup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<Markup> for String {
  fn from(markup: Markup) -> Self {
    markup.0
  }
}

impl PartialEq<&str> for Markup {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

/// Module script tag.
pub fn script_tag(path: &str) -> String {
  format!(r#"<script type="module" src="{path}"></script>"#)
}

/// Stylesheet link tag.
pub fn stylesheet_tag(path: &str) -> String {
  format!(r#"<link rel="stylesheet" href="{path}" />"#)
}

/// Module preload link tag.
pub fn preload_tag(path: &str) -> String {
  format!(r#"<link rel="modulepreload" href="{path}" />"#)
}

/// Render each path with `tag` and concatenate the fragments without separators.
pub fn render_all(paths: &[String], tag: fn(&str) -> String) -> Markup {
  Markup(paths.iter().map(|path| tag(path)).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_each_tag_kind() {
    assert_eq!(
      script_tag("assets/foo.js"),
      r#"<script type="module" src="assets/foo.js"></script>"#
    );
    assert_eq!(
      stylesheet_tag("assets/foo.css"),
      r#"<link rel="stylesheet" href="assets/foo.css" />"#
    );
    assert_eq!(
      preload_tag("assets/shared.js"),
      r#"<link rel="modulepreload" href="assets/shared.js" />"#
    );
  }

  #[test]
  fn concatenates_without_separator() {
    let paths = vec!["a.css".to_string(), "b.css".to_string()];
    let markup = render_all(&paths, stylesheet_tag);

    assert_eq!(
      markup,
      r#"<link rel="stylesheet" href="a.css" /><link rel="stylesheet" href="b.css" />"#
    );
  }

  #[test]
  fn markup_converts_into_plain_strings() {
    let markup = render_all(&["a.js".to_string()], script_tag);
    let expected = r#"<script type="module" src="a.js"></script>"#;

    assert_eq!(markup.to_string(), expected);
    assert_eq!(String::from(markup.clone()), expected);
    assert_eq!(markup.into_string(), expected);
  }

  #[test]
  fn empty_input_renders_nothing() {
    assert_eq!(render_all(&[], script_tag).as_str(), "");
  }
}
