//! Change highlighting for rephrased text.
//!
//! Given an original text, its rephrased version and the substitution hints
//! reported by the rephrasing service, this crate decides which words of the
//! rephrased text should be shown as changed, and where each came from.
//!
//! ## What we do
//!
//! - Tokenization into word and whitespace runs with byte offsets
//! - A change map of lowercased original word → replacement built from hints
//! - Value-based matching of rephrased words against the replacements
//! - A set-difference fallback when no hints exist
//! - HTML and plain-text marker rendering
//!
//! ## Why value matching
//!
//! Paraphrasing inserts, drops and reorders words, so the rephrased token
//! stream rarely lines up with the original one. Each rephrased word is
//! instead looked up among the replacement values; no positional alignment is
//! needed.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no shared state. Every call builds its own
//! tokens and map, so concurrent calls are independent.
//!
//! ## Invariants worth knowing
//!
//! - Concatenating [`tokenize`] output reproduces the input exactly
//! - Whitespace tokens are never marked changed
//! - A token's `changed` flag depends only on its text and the change map
//! - Hints whose `original` is `sentence_start` never enter the change map
//!
//! ```rust
//! use highlight::{highlight, HtmlRenderer, Render, SubstitutionHint};
//!
//! let hints = [SubstitutionHint::new("cat", "feline")];
//! let out = highlight("The cat sat.", "The feline sat.", Some(&hints));
//! assert_eq!(out.changed_words(), 1);
//!
//! let html = HtmlRenderer::default().render(&out.tokens);
//! assert!(html.contains("Changed from: cat"));
//! ```

mod annotate;
mod change_map;
mod config;
mod error;
mod highlighter;
mod hint;
mod punctuation;
mod render;
mod token;

pub use crate::annotate::{
    annotate, annotate_set_difference, annotate_unchanged, annotate_with, AnnotatedToken,
};
pub use crate::change_map::{build_change_map, build_change_map_with, ChangeMap};
pub use crate::config::{HighlightConfig, MissingHintsPolicy};
pub use crate::error::HighlightError;
pub use crate::highlighter::{highlight, Highlight, HighlightMode, Highlighter};
pub use crate::hint::{deserialize_lenient, parse_hints, ParsedHints, SubstitutionHint, SENTENCE_START};
pub use crate::punctuation::{
    comparison_key, strip_trailing_punctuation, strip_trailing_with, TRAILING_PUNCTUATION,
};
pub use crate::render::{escape_html, HtmlRenderer, MarkerRenderer, Render};
pub use crate::token::{reconstruct, tokenize, word_count, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(original: &str, replacement: &str) -> SubstitutionHint {
        SubstitutionHint::new(original, replacement)
    }

    #[test]
    fn end_to_end_cat_feline() {
        let hints = [hint("cat", "feline")];
        let out = highlight("The cat sat.", "The feline sat.", Some(&hints));

        assert_eq!(out.mode, HighlightMode::Hints);
        assert_eq!(
            out.tokens,
            vec![
                AnnotatedToken::unchanged("The"),
                AnnotatedToken::unchanged(" "),
                AnnotatedToken::changed("feline", Some("cat".into())),
                AnnotatedToken::unchanged(" "),
                AnnotatedToken::unchanged("sat."),
            ]
        );
    }

    #[test]
    fn case_insensitive_with_trailing_comma() {
        let hints = [hint("Happy", "Joyful")];
        let out = highlight("I am happy, truly.", "I am joyful, truly.", Some(&hints));
        let joyful = out.tokens.iter().find(|t| t.text == "joyful,").unwrap();
        assert!(joyful.changed);
        assert_eq!(joyful.matched_original.as_deref(), Some("happy"));
    }

    #[test]
    fn sentinel_never_marks_its_replacement() {
        let hints = [hint("sentence_start", "Basically,"), hint("big", "large")];
        let out = highlight("A big dog.", "Basically, a large dog.", Some(&hints));
        let basically = &out.tokens[0];
        assert_eq!(basically.text, "Basically,");
        assert!(!basically.changed);
        assert_eq!(out.changed_words(), 1);
    }

    #[test]
    fn sentinel_replacement_can_match_through_real_hint() {
        let hints = [hint("sentence_start", "So"), hint("thus", "so")];
        let out = highlight("Thus it went.", "So it went.", Some(&hints));
        assert!(out.tokens[0].changed);
        assert_eq!(out.tokens[0].matched_original.as_deref(), Some("thus"));
    }

    #[test]
    fn last_hint_wins() {
        let map = build_change_map(&[hint("a", "x"), hint("a", "y")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some("y"));

        let out = highlight("a", "x y", Some(&[hint("a", "x"), hint("a", "y")]));
        assert!(!out.tokens[0].changed);
        assert!(out.tokens[2].changed);
    }

    #[test]
    fn fallback_set_difference_scenario() {
        let out = highlight("the quick fox", "the swift fox", None);
        let flags: Vec<(&str, bool)> = out
            .tokens
            .iter()
            .filter(|t| !t.text.trim().is_empty())
            .map(|t| (t.text.as_str(), t.changed))
            .collect();
        assert_eq!(flags, vec![("the", false), ("swift", true), ("fox", false)]);
    }

    #[test]
    fn ambiguous_replacement_resolves_to_first_original() {
        let hints = [hint("big", "large"), hint("huge", "Large")];
        let out = highlight("big huge", "large large", Some(&hints));
        assert_eq!(out.tokens[0].matched_original.as_deref(), Some("big"));
        assert_eq!(out.tokens[2].matched_original.as_deref(), Some("big"));
    }

    #[test]
    fn highlight_text_round_trips() {
        let rephrased = "  Simply put,\tthe feline\nsat.  ";
        let out = highlight("the cat sat.", rephrased, Some(&[hint("cat", "feline")]));
        assert_eq!(out.text(), rephrased);
    }
}
