//! Configuration types for the highlight pipeline.
//!
//! [`HighlightConfig`] controls which hints are treated as structural, which
//! trailing characters are ignored when comparing words, and what happens when
//! the caller has no substitution hints at all.
//!
//! # Examples
//!
//! ```rust
//! use highlight::{HighlightConfig, MissingHintsPolicy};
//!
//! let config = HighlightConfig::default();
//! assert_eq!(config.sentinel, "sentence_start");
//! assert_eq!(config.trailing_punctuation, ".,!?;:");
//! assert_eq!(config.missing_hints, MissingHintsPolicy::SetDifference);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HighlightError;
use crate::hint::SENTENCE_START;
use crate::punctuation::TRAILING_PUNCTUATION;

/// What to do when no substitution hint sequence is available.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingHintsPolicy {
    /// Mark every rephrased word that does not occur in the original text.
    #[default]
    SetDifference,
    /// Render the rephrased text without any marks.
    Unannotated,
}

/// Configuration for the highlight pipeline.
///
/// Cheap to clone and serde-friendly so it can sit inside larger
/// application configs:
///
/// ```json
/// {
///   "sentinel": "sentence_start",
///   "trailing_punctuation": ".,!?;:",
///   "missing_hints": "set_difference"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HighlightConfig {
    /// Hint `original` value marking a structural edit. Matched exactly,
    /// case-sensitive.
    pub sentinel: String,

    /// Characters stripped (at most one, trailing only) before comparison.
    pub trailing_punctuation: String,

    /// Policy used when the caller passes no hints at all.
    pub missing_hints: MissingHintsPolicy,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            sentinel: SENTENCE_START.to_string(),
            trailing_punctuation: TRAILING_PUNCTUATION.iter().collect(),
            missing_hints: MissingHintsPolicy::default(),
        }
    }
}

impl HighlightConfig {
    /// Checks the config for values that would make matching meaningless.
    pub fn validate(&self) -> Result<(), HighlightError> {
        if self.sentinel.trim().is_empty() {
            return Err(HighlightError::InvalidConfig(
                "sentinel must not be empty".into(),
            ));
        }
        if self.trailing_punctuation.chars().any(char::is_whitespace) {
            return Err(HighlightError::InvalidConfig(
                "trailing_punctuation must not contain whitespace".into(),
            ));
        }
        Ok(())
    }

    /// The strippable punctuation as a char slice.
    pub(crate) fn punctuation(&self) -> Vec<char> {
        self.trailing_punctuation.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(HighlightConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_sentinel_rejected() {
        let cfg = HighlightConfig {
            sentinel: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(HighlightError::InvalidConfig(_))
        ));
    }

    #[test]
    fn whitespace_punctuation_rejected() {
        let cfg = HighlightConfig {
            trailing_punctuation: ". ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: HighlightConfig =
            serde_json::from_str(r#"{"missing_hints":"unannotated"}"#).unwrap();
        assert_eq!(cfg.missing_hints, MissingHintsPolicy::Unannotated);
        assert_eq!(cfg.sentinel, "sentence_start");
        assert_eq!(cfg.punctuation(), vec!['.', ',', '!', '?', ';', ':']);
    }
}
