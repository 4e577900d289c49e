use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use highlight::Highlighter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Process-wide recorder; installed at most once.
static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Shared application state. Read-only after construction.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Highlighter built from `config.highlight`
    pub highlighter: Arc<Highlighter>,

    /// Prometheus render handle, when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let highlighter = Arc::new(Highlighter::new(config.highlight.clone())?);

        let metrics = if config.metrics_enabled {
            let handle = PROMETHEUS
                .get_or_try_init(|| PrometheusBuilder::new().install_recorder())
                .map_err(|e| ServerError::Config(format!("metrics recorder: {e}")))?;
            Some(handle.clone())
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            highlighter,
            metrics,
        })
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
