use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use client::{AnalyzeResponse, RephraseResponse};
use plagcheck::view::{render_analysis, RephraseView};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Rendered analysis card
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisHtml {
    pub html: String,
}

/// Render an `/analyze` response as the result card.
pub async fn render_analysis_card(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<AnalyzeResponse>, JsonRejection>,
) -> ServerResult<Json<AnalysisHtml>> {
    let Json(resp) = payload?;
    Ok(Json(AnalysisHtml {
        html: render_analysis(&resp, &state.config.view),
    }))
}

/// Render a `/rephrase` response as plain and highlighted panes.
pub async fn render_rephrase_panes(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<RephraseResponse>, JsonRejection>,
) -> ServerResult<Json<RephraseView>> {
    let Json(resp) = payload?;
    let view = RephraseView::build(&resp, &state.highlighter, &state.config.view);
    metrics::counter!("highlight_changed_tokens_total").increment(view.highlighted_words as u64);
    Ok(Json(view))
}
