//! Key normalization for language variables.

use regex::Regex;
use std::sync::OnceLock;

/// Normalize a language variable key to a URL-safe slug.
///
/// Lowercases the input, collapses every run of characters outside `a-z0-9`
/// into a single `-`, and trims leading/trailing separators.
///
/// # Example
/// ```
/// assert_eq!(cms_panel::i18n::slug("Hello World"), "hello-world");
/// ```
pub fn slug(key: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let non_alnum = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    non_alnum
        .replace_all(&key.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
