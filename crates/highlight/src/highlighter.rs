use serde::{Deserialize, Serialize};

use crate::annotate::{annotate_set_difference, annotate_unchanged, annotate_with, AnnotatedToken};
use crate::change_map::{build_change_map_with, ChangeMap};
use crate::config::{HighlightConfig, MissingHintsPolicy};
use crate::error::HighlightError;
use crate::hint::SubstitutionHint;
use crate::token::{reconstruct, tokenize};

/// Policy that produced a [`Highlight`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Words matched against the replacement values of the hints.
    Hints,
    /// Words absent from the original text's vocabulary.
    SetDifference,
    /// No marks.
    Unannotated,
}

/// Annotated rephrased text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Highlight {
    pub mode: HighlightMode,
    pub tokens: Vec<AnnotatedToken>,
}

impl Highlight {
    /// Number of word tokens marked changed.
    pub fn changed_words(&self) -> usize {
        self.tokens.iter().filter(|t| t.changed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The rephrased text, rebuilt from the tokens.
    pub fn text(&self) -> String {
        reconstruct(&self.tokens)
    }
}

/// Entry point tying tokenizer, change map and annotator together.
#[derive(Debug, Clone)]
pub struct Highlighter {
    config: HighlightConfig,
    punctuation: Vec<char>,
}

impl Default for Highlighter {
    fn default() -> Self {
        let config = HighlightConfig::default();
        let punctuation = config.punctuation();
        Self {
            config,
            punctuation,
        }
    }
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> Result<Self, HighlightError> {
        config.validate()?;
        let punctuation = config.punctuation();
        Ok(Self {
            config,
            punctuation,
        })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Builds the change map using the configured sentinel.
    pub fn change_map(&self, hints: &[SubstitutionHint]) -> ChangeMap {
        build_change_map_with(hints, &self.config.sentinel)
    }

    /// Annotates `rephrased`.
    ///
    /// - `Some(hints)` with at least one lexical hint: hint mode.
    /// - `Some(hints)` with none: unannotated, the service reported no word
    ///   substitutions.
    /// - `None`: the configured [`MissingHintsPolicy`].
    pub fn highlight(
        &self,
        original: &str,
        rephrased: &str,
        hints: Option<&[SubstitutionHint]>,
    ) -> Highlight {
        match hints {
            Some(hints) => {
                let map = self.change_map(hints);
                if map.is_empty() {
                    self.run(original, rephrased, &map, HighlightMode::Unannotated)
                } else {
                    self.run(original, rephrased, &map, HighlightMode::Hints)
                }
            }
            None => {
                let mode = match self.config.missing_hints {
                    MissingHintsPolicy::SetDifference => HighlightMode::SetDifference,
                    MissingHintsPolicy::Unannotated => HighlightMode::Unannotated,
                };
                self.run(original, rephrased, &ChangeMap::new(), mode)
            }
        }
    }

    /// Annotates `rephrased` with an explicit policy, ignoring the selection
    /// rules of [`highlight`](Self::highlight).
    pub fn highlight_with_mode(
        &self,
        original: &str,
        rephrased: &str,
        hints: &[SubstitutionHint],
        mode: HighlightMode,
    ) -> Highlight {
        let map = match mode {
            HighlightMode::Hints => self.change_map(hints),
            HighlightMode::SetDifference | HighlightMode::Unannotated => ChangeMap::new(),
        };
        self.run(original, rephrased, &map, mode)
    }

    fn run(&self, original: &str, rephrased: &str, map: &ChangeMap, mode: HighlightMode) -> Highlight {
        let rephrased_tokens = tokenize(rephrased);
        let tokens = match mode {
            HighlightMode::Hints => annotate_with(&rephrased_tokens, map, &self.punctuation),
            HighlightMode::SetDifference => {
                annotate_set_difference(&tokenize(original), &rephrased_tokens, &self.punctuation)
            }
            HighlightMode::Unannotated => annotate_unchanged(&rephrased_tokens),
        };

        let highlight = Highlight { mode, tokens };
        tracing::debug!(
            mode = ?highlight.mode,
            hints = map.len(),
            tokens = highlight.tokens.len(),
            changed = highlight.changed_words(),
            "highlighted rephrased text"
        );
        highlight
    }
}

/// [`Highlighter::highlight`] with the default configuration.
pub fn highlight(original: &str, rephrased: &str, hints: Option<&[SubstitutionHint]>) -> Highlight {
    Highlighter::default().highlight(original, rephrased, hints)
}
