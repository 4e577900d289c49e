use thiserror::Error;

/// Errors surfaced by the highlight layer.
///
/// Highlighting itself never fails on payload data. `MalformedHint` only shows
/// up in the skip report returned by [`parse_hints`](crate::parse_hints).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed substitution hint at index {index}: {reason}")]
    MalformedHint { index: usize, reason: String },
}
