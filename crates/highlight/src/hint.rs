//! Substitution hints reported by the rephrasing service.
//!
//! Hints arrive as a JSON array of `{original, replacement, position?}`
//! objects. The array is parsed entry by entry: an entry missing either
//! string field is skipped and reported, the rest are kept in order.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::HighlightError;

/// `original` value of a structural hint (a sentence opener was added rather
/// than a word replaced).
pub const SENTENCE_START: &str = "sentence_start";

/// One edit the rephrasing service claims to have made.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubstitutionHint {
    pub original: String,
    pub replacement: String,
    /// Token index inside the sentence, `-1` for structural hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl SubstitutionHint {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// True when `original` equals `sentinel` exactly.
    pub fn is_structural(&self, sentinel: &str) -> bool {
        self.original == sentinel
    }
}

/// Result of lenient hint parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHints {
    pub hints: Vec<SubstitutionHint>,
    pub skipped: Vec<HighlightError>,
}

/// Parses raw JSON hint entries, skipping malformed ones.
pub fn parse_hints(values: &[Value]) -> ParsedHints {
    let mut parsed = ParsedHints {
        hints: Vec::with_capacity(values.len()),
        skipped: Vec::new(),
    };

    for (index, value) in values.iter().enumerate() {
        match parse_hint(value) {
            Ok(hint) => parsed.hints.push(hint),
            Err(reason) => parsed
                .skipped
                .push(HighlightError::MalformedHint { index, reason }),
        }
    }

    parsed
}

fn parse_hint(value: &Value) -> Result<SubstitutionHint, String> {
    let object = value
        .as_object()
        .ok_or_else(|| format!("expected an object, found {}", json_kind(value)))?;

    let field = |name: &str| -> Result<String, String> {
        match object.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(format!(
                "`{name}` must be a string, found {}",
                json_kind(other)
            )),
            None => Err(format!("missing `{name}`")),
        }
    };

    let original = field("original")?;
    let replacement = field("replacement")?;
    let position = object.get("position").and_then(Value::as_i64);

    Ok(SubstitutionHint {
        original,
        replacement,
        position,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serde helper for `changes_made`-style fields.
///
/// Accepts a missing field (with `#[serde(default)]`), `null`, or an array
/// whose malformed entries are dropped with a warning.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<SubstitutionHint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let parsed = parse_hints(&raw);
    for skipped in &parsed.skipped {
        tracing::warn!(error = %skipped, "skipping substitution hint");
    }
    Ok(parsed.hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_entries_keep_order() {
        let raw = vec![
            json!({"original": "happy", "replacement": "joyful", "position": 2}),
            json!({"original": "sentence_start", "replacement": "Simply put,", "position": -1}),
        ];
        let parsed = parse_hints(&raw);
        assert!(parsed.skipped.is_empty());
        assert_eq!(
            parsed.hints,
            vec![
                SubstitutionHint::new("happy", "joyful").with_position(2),
                SubstitutionHint::new("sentence_start", "Simply put,").with_position(-1),
            ]
        );
        assert!(parsed.hints[1].is_structural(SENTENCE_START));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let raw = vec![
            json!({"original": "cat"}),
            json!({"replacement": "feline"}),
            json!({"original": "big", "replacement": 3}),
            json!("not an object"),
            json!({"original": "small", "replacement": "tiny"}),
        ];
        let parsed = parse_hints(&raw);
        assert_eq!(parsed.hints, vec![SubstitutionHint::new("small", "tiny")]);
        assert_eq!(parsed.skipped.len(), 4);
        assert!(matches!(
            parsed.skipped[0],
            HighlightError::MalformedHint { index: 0, .. }
        ));
        assert!(parsed.skipped[3].to_string().contains("found string"));
    }

    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        changes_made: Vec<SubstitutionHint>,
    }

    #[test]
    fn lenient_field_accepts_missing_and_null() {
        let missing: Envelope = serde_json::from_str("{}").unwrap();
        assert!(missing.changes_made.is_empty());

        let null: Envelope = serde_json::from_str(r#"{"changes_made": null}"#).unwrap();
        assert!(null.changes_made.is_empty());

        let mixed: Envelope = serde_json::from_str(
            r#"{"changes_made": [{"original": "a"}, {"original": "a", "replacement": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(mixed.changes_made, vec![SubstitutionHint::new("a", "b")]);
    }

    #[test]
    fn sentinel_match_is_case_sensitive() {
        let hint = SubstitutionHint::new("Sentence_Start", "x");
        assert!(!hint.is_structural(SENTENCE_START));
    }
}
