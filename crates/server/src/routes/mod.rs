//! API route handlers
//!
//! - `changes`: change highlighting of rephrased text
//! - `health`: liveness, readiness and Prometheus metrics
//! - `render`: HTML rendering of analysis and rephrase responses

pub mod changes;
pub mod health;
pub mod render;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// ```json
/// {
///   "name": "Plagcheck Server",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Plagcheck Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/highlight",
            "/api/v1/render/analysis",
            "/api/v1/render/rephrase",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
