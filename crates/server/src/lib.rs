//! Plagcheck Server - HTTP API for change highlighting and result rendering
//!
//! Exposes the highlighter and the result views over JSON so that a page or
//! another service can get highlighted rephrase panes and analysis cards
//! without linking the Rust crates.
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: `.env`, an optional `server` file and
//!   `PLAGCHECK_SERVER__*` environment variables
//! - **Error Handling**: `{"error": {"code", "message"}}` bodies with HTTP status
//! - **Metrics**: Prometheus exposition at `/metrics`
//! - **Graceful Shutdown**: SIGTERM and Ctrl+C
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/v1/highlight` - Annotate a rephrased text
//! - `POST /api/v1/render/analysis` - Analysis card HTML
//! - `POST /api/v1/render/rephrase` - Plain and highlighted rephrase panes

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
