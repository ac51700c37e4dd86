use std::sync::LazyLock;

use regex::Regex;

// ASCII word characters only: anything in another script is dropped.
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid strip pattern"));

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid separator pattern"));

/// URL-safe lowercase slug. Returns an empty string when nothing ASCII
/// survives, e.g. for a name written only in Chinese.
pub fn slugify(text: &str) -> String {
    let stripped = STRIP_RE.replace_all(text, "");
    let hyphenated = SEPARATOR_RE.replace_all(&stripped, "-");
    hyphenated.to_lowercase().trim_matches('-').to_string()
}
