use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL slug from a title.
///
/// Lowercases the title and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing dashes are kept, so
/// `"Hello, World!"` becomes `"hello-world-"`.
pub fn slugify(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(slugify("Annual Science Fair"), "annual-science-fair");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("Sports -- Day & Fun"), "sports-day-fun");
        assert_eq!(slugify("Hello, World!"), "hello-world-");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        assert_eq!(slugify("Café Night"), "caf-night");
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(slugify(""), "");
    }
}
