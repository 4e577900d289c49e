use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use highlight::{parse_hints, AnnotatedToken, HighlightMode, Render, SubstitutionHint};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Highlight request
#[derive(Debug, Deserialize)]
pub struct HighlightRequest {
    #[serde(default)]
    pub original_text: String,

    pub rephrased_text: String,

    /// Substitution hints. Absent or `null` means "no hints available";
    /// malformed entries are skipped.
    #[serde(default, deserialize_with = "optional_hints")]
    pub changes_made: Option<Vec<SubstitutionHint>>,

    /// Force a policy instead of choosing one from the hints
    #[serde(default)]
    pub mode: Option<HighlightMode>,
}

/// Highlight response
#[derive(Debug, Serialize, Deserialize)]
pub struct HighlightResponse {
    pub mode: HighlightMode,
    pub changed_words: usize,
    pub tokens: Vec<AnnotatedToken>,
    pub html: String,
}

fn optional_hints<'de, D>(deserializer: D) -> Result<Option<Vec<SubstitutionHint>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        let parsed = parse_hints(&values);
        if !parsed.skipped.is_empty() {
            tracing::warn!(skipped = parsed.skipped.len(), "dropped malformed hints");
        }
        parsed.hints
    }))
}

/// Annotate a rephrased text with the words that changed.
pub async fn highlight_text(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<HighlightRequest>, JsonRejection>,
) -> ServerResult<Json<HighlightResponse>> {
    let Json(request) = payload?;

    let out = match request.mode {
        Some(mode) => state.highlighter.highlight_with_mode(
            &request.original_text,
            &request.rephrased_text,
            request.changes_made.as_deref().unwrap_or_default(),
            mode,
        ),
        None => state.highlighter.highlight(
            &request.original_text,
            &request.rephrased_text,
            request.changes_made.as_deref(),
        ),
    };

    let changed_words = out.changed_words();
    let mode_label = match out.mode {
        HighlightMode::Hints => "hints",
        HighlightMode::SetDifference => "set_difference",
        HighlightMode::Unannotated => "unannotated",
    };
    metrics::counter!("highlight_requests_total", "mode" => mode_label).increment(1);
    metrics::counter!("highlight_changed_tokens_total").increment(changed_words as u64);

    let html = state.config.view.highlight.render(&out.tokens);

    Ok(Json(HighlightResponse {
        mode: out.mode,
        changed_words,
        tokens: out.tokens,
        html,
    }))
}
