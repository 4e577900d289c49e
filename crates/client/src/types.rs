//! Wire types for the `/analyze` and `/rephrase` endpoints.
//!
//! Responses are parsed defensively: list fields may be missing, hint entries
//! may be malformed (they are dropped), and unknown `risk_color` strings are
//! kept as [`RiskColor::Other`].

use std::fmt;

use highlight::SubstitutionHint;
use serde::{Deserialize, Serialize};

/// The two backend actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Analyze,
    Rephrase,
}

impl Action {
    /// Endpoint path relative to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Rephrase => "rephrase",
        }
    }

    /// Message used when the service fails without an `error` field.
    pub fn default_error(self) -> &'static str {
        match self {
            Action::Analyze => "An error occurred during analysis.",
            Action::Rephrase => "An error occurred during rephrasing.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Target register for the rephraser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RephraseStyle {
    #[default]
    Academic,
    Formal,
    Casual,
    Simple,
}

/// How aggressively words are substituted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Creativity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RephraseRequest {
    pub text: String,
    #[serde(default)]
    pub style: RephraseStyle,
    #[serde(default)]
    pub creativity: Creativity,
}

impl RephraseRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RephraseStyle::default(),
            creativity: Creativity::default(),
        }
    }

    pub fn with_style(mut self, style: RephraseStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_creativity(mut self, creativity: Creativity) -> Self {
        self.creativity = creativity;
        self
    }
}

/// Body of a successful `/rephrase` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RephraseResponse {
    #[serde(default)]
    pub rephrased_text: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default, deserialize_with = "highlight::deserialize_lenient")]
    pub changes_made: Vec<SubstitutionHint>,
    #[serde(default)]
    pub words_changed: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rephrased_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity: Option<String>,
}

/// Severity bucket reported by the analyzer, named after the badge colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum RiskColor {
    Danger,
    Warning,
    Info,
    #[default]
    Success,
    Other(String),
}

impl RiskColor {
    pub fn as_str(&self) -> &str {
        match self {
            RiskColor::Danger => "danger",
            RiskColor::Warning => "warning",
            RiskColor::Info => "info",
            RiskColor::Success => "success",
            RiskColor::Other(other) => other.as_str(),
        }
    }
}

impl From<String> for RiskColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "danger" => RiskColor::Danger,
            "warning" => RiskColor::Warning,
            "info" => RiskColor::Info,
            "success" => RiskColor::Success,
            _ => RiskColor::Other(value),
        }
    }
}

impl From<RiskColor> for String {
    fn from(value: RiskColor) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TextAnalysis {
    #[serde(default)]
    pub total_words: usize,
    #[serde(default)]
    pub unique_words: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_sentences: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_words_per_sentence: Option<f64>,
}

/// Body of a successful `/analyze` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub plagiarism_score: f64,
    #[serde(default)]
    pub plagiarism_level: String,
    #[serde(default)]
    pub risk_color: RiskColor,
    #[serde(default)]
    pub text_analysis: TextAnalysis,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub common_phrases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_patterns: Option<u64>,
}

impl AnalyzeResponse {
    /// Score clamped to the 0-100 range used by the progress bar.
    pub fn clamped_score(&self) -> f64 {
        if self.plagiarism_score.is_nan() {
            return 0.0;
        }
        self.plagiarism_score.clamp(0.0, 100.0)
    }
}

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
