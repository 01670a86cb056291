//! Keyword matching over free-text labels.
//!
//! Long keywords match anywhere in a label. Short keywords that commonly
//! occur inside unrelated words ("park" in "parking", "비" in "비교적") only
//! match a whole token.

/// Split a lowercase label into alphanumeric tokens.
fn tokens(lowercase_label: &str) -> impl Iterator<Item = &str> {
    lowercase_label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Report whether `lowercase_label` contains any of `substrings` or has a
/// token equal to any of `whole_tokens`.
pub(crate) fn matches(lowercase_label: &str, substrings: &[&str], whole_tokens: &[&str]) -> bool {
    substrings
        .iter()
        .any(|keyword| lowercase_label.contains(keyword))
        || tokens(lowercase_label).any(|token| whole_tokens.iter().any(|keyword| *keyword == token))
}
