use indexmap::IndexSet;
use regex::Regex;

fn stylesheet_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\.(css|less|sass|scss|styl|stylus|pcss|postcss|sss)(\?.*)?$")
            .expect("invalid stylesheet regex")
    })
}

/// Determine whether a path names a stylesheet, judging by its extension.
///
/// Preprocessor extensions count as stylesheets since the dev server compiles them on
/// request, and a trailing query string (`?inline`, `?v=123`) is ignored.
pub fn is_stylesheet(path: &str) -> bool {
    stylesheet_pattern().is_match(path)
}

/// Drop repeated paths, keeping each one at the position it first appeared.
pub fn unique_in_order<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(Into::into)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
