use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::{timeout_at, Instant};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{
    Action, AnalyzeRequest, AnalyzeResponse, ErrorBody, RephraseRequest, RephraseResponse,
};
use crate::validate::validate_input;

/// HTTP client for the analysis and rephrasing service.
///
/// Every call validates its input first, then runs the whole exchange
/// (connect, send, read body) under one wall-clock deadline.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base: reqwest::Url,
    config: ClientConfig,
}

impl ServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = reqwest::Url::parse(&raw)
            .map_err(|e| ClientError::InvalidConfig(format!("base_url '{raw}': {e}")))?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(8)
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self { http, base, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Deadline for an `action` started now.
    pub fn deadline_for(&self, action: Action) -> Result<Instant, ClientError> {
        let deadline = self
            .config
            .deadline_after(action, std::time::Instant::now())?;
        Ok(Instant::from_std(deadline))
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalyzeResponse, ClientError> {
        self.analyze_until(text, self.deadline_for(Action::Analyze)?)
            .await
    }

    pub async fn analyze_until(
        &self,
        text: &str,
        deadline: Instant,
    ) -> Result<AnalyzeResponse, ClientError> {
        let text = validate_input(Action::Analyze, text, &self.config)?;
        self.post(Action::Analyze, &AnalyzeRequest { text }, deadline)
            .await
    }

    pub async fn rephrase(&self, request: RephraseRequest) -> Result<RephraseResponse, ClientError> {
        self.rephrase_until(request, self.deadline_for(Action::Rephrase)?)
            .await
    }

    pub async fn rephrase_until(
        &self,
        mut request: RephraseRequest,
        deadline: Instant,
    ) -> Result<RephraseResponse, ClientError> {
        request.text = validate_input(Action::Rephrase, &request.text, &self.config)?;
        self.post(Action::Rephrase, &request, deadline).await
    }

    async fn post<B, R>(&self, action: Action, body: &B, deadline: Instant) -> Result<R, ClientError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self
            .base
            .join(action.path())
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        tracing::debug!(%action, %url, "sending request");

        let exchange = async {
            let response = self.http.post(url).json(body).send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            Ok::<_, ClientError>((status, bytes))
        };

        let (status, bytes) = match timeout_at(deadline, exchange).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(%action, "request deadline elapsed");
                return Err(ClientError::Timeout);
            }
        };

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| action.default_error().to_string());
            tracing::warn!(%action, status = status.as_u16(), %message, "service error");
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%action, error = %e, "undecodable response body");
            ClientError::Decode(e.to_string())
        })
    }
}
