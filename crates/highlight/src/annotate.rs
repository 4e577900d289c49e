use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::change_map::ChangeMap;
use crate::punctuation::{comparison_key, TRAILING_PUNCTUATION};
use crate::token::Token;

/// Rendering-ready token: text, change status and "changed from" label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedToken {
    pub text: String,
    pub changed: bool,
    pub matched_original: Option<String>,
}

impl AnnotatedToken {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: false,
            matched_original: None,
        }
    }

    pub fn changed(text: impl Into<String>, matched_original: Option<String>) -> Self {
        Self {
            text: text.into(),
            changed: true,
            matched_original,
        }
    }
}

impl AsRef<str> for AnnotatedToken {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Marks rephrased tokens whose comparison form is a replacement in `map`.
pub fn annotate(tokens: &[Token], map: &ChangeMap) -> Vec<AnnotatedToken> {
    annotate_with(tokens, map, &TRAILING_PUNCTUATION)
}

/// [`annotate`] with a custom trailing punctuation set.
///
/// Matching is by value: a word is changed when it equals (case-insensitive,
/// one trailing punctuation char ignored) any replacement in the map. The
/// label is the first original in map order producing that replacement.
pub fn annotate_with(tokens: &[Token], map: &ChangeMap, punctuation: &[char]) -> Vec<AnnotatedToken> {
    if map.is_empty() {
        return annotate_unchanged(tokens);
    }

    let reverse = map.reverse_index();
    tokens
        .iter()
        .map(|token| {
            if token.is_separator() {
                return AnnotatedToken::unchanged(token.text.as_str());
            }
            let clean = comparison_key(&token.text, punctuation);
            match reverse.get(clean.as_str()) {
                Some(original) => {
                    AnnotatedToken::changed(token.text.as_str(), Some((*original).to_string()))
                }
                None => AnnotatedToken::unchanged(token.text.as_str()),
            }
        })
        .collect()
}

/// Set-difference fallback: a rephrased word is changed when its comparison
/// form never occurs among the original text's words.
///
/// Reordered but otherwise untouched words stay unmarked; words repeated from
/// elsewhere in the original are missed. `matched_original` is always `None`.
pub fn annotate_set_difference(
    original: &[Token],
    rephrased: &[Token],
    punctuation: &[char],
) -> Vec<AnnotatedToken> {
    let vocabulary: FxHashSet<String> = original
        .iter()
        .filter(|t| t.is_word())
        .map(|t| comparison_key(&t.text, punctuation))
        .collect();

    rephrased
        .iter()
        .map(|token| {
            if token.is_word() && !vocabulary.contains(&comparison_key(&token.text, punctuation)) {
                AnnotatedToken::changed(token.text.as_str(), None)
            } else {
                AnnotatedToken::unchanged(token.text.as_str())
            }
        })
        .collect()
}

/// Every token unchanged.
pub fn annotate_unchanged(tokens: &[Token]) -> Vec<AnnotatedToken> {
    tokens
        .iter()
        .map(|t| AnnotatedToken::unchanged(t.text.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change_map::build_change_map;
    use crate::hint::SubstitutionHint;
    use crate::token::tokenize;

    #[test]
    fn empty_map_marks_nothing() {
        let out = annotate(&tokenize("The feline sat."), &ChangeMap::new());
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|t| !t.changed && t.matched_original.is_none()));
    }

    #[test]
    fn value_match_ignores_case_and_trailing_punctuation() {
        let map = build_change_map(&[SubstitutionHint::new("Happy", "Joyful")]);
        let out = annotate(&tokenize("so joyful, really"), &map);
        assert_eq!(out[2], AnnotatedToken::changed("joyful,", Some("happy".into())));
        assert!(!out[0].changed);
        assert!(!out[4].changed);
    }

    #[test]
    fn key_lookup_is_not_used() {
        // The original word surviving in the rephrased text is not a change.
        let map = build_change_map(&[SubstitutionHint::new("cat", "feline")]);
        let out = annotate(&tokenize("cat"), &map);
        assert!(!out[0].changed);
    }

    #[test]
    fn separators_never_change() {
        let map = build_change_map(&[SubstitutionHint::new("x", " ")]);
        let out = annotate(&tokenize("a b"), &map);
        assert!(out.iter().all(|t| !t.changed));
    }

    #[test]
    fn interior_punctuation_blocks_match() {
        let map = build_change_map(&[SubstitutionHint::new("do not", "don't")]);
        let out = annotate(&tokenize("don't, don't! do-n't"), &map);
        assert!(out[0].changed);
        assert!(out[2].changed);
        assert!(!out[4].changed);
    }

    #[test]
    fn set_difference_marks_new_words() {
        let original = tokenize("the quick fox");
        let rephrased = tokenize("the swift fox");
        let out = annotate_set_difference(&original, &rephrased, &TRAILING_PUNCTUATION);
        let changed: Vec<&str> = out.iter().filter(|t| t.changed).map(|t| t.text.as_str()).collect();
        assert_eq!(changed, vec!["swift"]);
        assert!(out.iter().all(|t| t.matched_original.is_none()));
    }

    #[test]
    fn set_difference_tolerates_reordering_and_case() {
        let original = tokenize("Fox, the quick.");
        let rephrased = tokenize("The quick fox.");
        let out = annotate_set_difference(&original, &rephrased, &TRAILING_PUNCTUATION);
        assert!(out.iter().all(|t| !t.changed));
    }
}
