//! Comparison-time punctuation handling.
//!
//! Tokens keep their punctuation; it is only dropped when two words are
//! compared. Exactly one trailing character from the configured set is
//! removed. Leading and interior punctuation are never touched, so `don't,`
//! compares as `don't` and `end?!` compares as `end?`.

/// Default set of strippable trailing characters.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Removes one trailing character from the default set, if present.
///
/// ```rust
/// use highlight::strip_trailing_punctuation;
///
/// assert_eq!(strip_trailing_punctuation("sat."), "sat");
/// assert_eq!(strip_trailing_punctuation("don't,"), "don't");
/// assert_eq!(strip_trailing_punctuation("wait..."), "wait..");
/// assert_eq!(strip_trailing_punctuation("\"quoted\""), "\"quoted\"");
/// ```
pub fn strip_trailing_punctuation(word: &str) -> &str {
    strip_trailing_with(word, &TRAILING_PUNCTUATION)
}

/// Removes one trailing character from `set`, if present.
pub fn strip_trailing_with<'a>(word: &'a str, set: &[char]) -> &'a str {
    match word.chars().next_back() {
        Some(last) if set.contains(&last) => &word[..word.len() - last.len_utf8()],
        _ => word,
    }
}

/// Lowercases `word` and strips one trailing character from `set`.
pub fn comparison_key(word: &str, set: &[char]) -> String {
    let lowered = word.to_lowercase();
    strip_trailing_with(&lowered, set).to_string()
}
