use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::types::Action;

/// Largest accepted action or connect timeout (one hour).
pub const MAX_TIMEOUT_MS: u64 = 3_600_000;

/// Connection and validation settings for [`ServiceClient`](crate::ServiceClient).
///
/// ```rust
/// use client::ClientConfig;
///
/// let cfg = ClientConfig::default();
/// assert_eq!(cfg.base_url, "http://127.0.0.1:5000/");
/// assert_eq!(cfg.rephrase_timeout_ms, 15_000);
/// assert_eq!(cfg.min_analyze_chars, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root; `analyze` and `rephrase` are resolved against it.
    pub base_url: String,
    /// Wall-clock budget for one analyze action.
    pub analyze_timeout_ms: u64,
    /// Wall-clock budget for one rephrase action.
    pub rephrase_timeout_ms: u64,
    /// TCP connect timeout handed to the HTTP client.
    pub connect_timeout_ms: u64,
    /// Minimum trimmed length (in characters) accepted for analysis.
    pub min_analyze_chars: usize,
    /// Minimum trimmed length (in characters) accepted for rephrasing.
    pub min_rephrase_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".into(),
            analyze_timeout_ms: 30_000,
            rephrase_timeout_ms: 15_000,
            connect_timeout_ms: 10_000,
            min_analyze_chars: 50,
            min_rephrase_chars: 10,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("base_url must not be empty".into()));
        }
        if self.analyze_timeout_ms == 0 || self.rephrase_timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "action timeouts must be greater than zero".into(),
            ));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "connect_timeout_ms must be greater than zero".into(),
            ));
        }
        let longest = self
            .analyze_timeout_ms
            .max(self.rephrase_timeout_ms)
            .max(self.connect_timeout_ms);
        if longest > MAX_TIMEOUT_MS {
            return Err(ClientError::InvalidConfig(format!(
                "timeouts must not exceed {MAX_TIMEOUT_MS} ms, got {longest}"
            )));
        }
        Ok(())
    }

    /// Deadline for `action` started at `now`.
    ///
    /// Fails instead of overflowing the clock when the configured budget is
    /// out of range, which can happen for configs that skipped `validate`.
    pub fn deadline_after(&self, action: Action, now: Instant) -> Result<Instant, ClientError> {
        let budget = self.timeout_for(action);
        if budget > Duration::from_millis(MAX_TIMEOUT_MS) {
            return Err(ClientError::InvalidConfig(format!(
                "{action} timeout of {} ms exceeds {MAX_TIMEOUT_MS} ms",
                budget.as_millis()
            )));
        }
        now.checked_add(budget).ok_or_else(|| {
            ClientError::InvalidConfig(format!("{action} deadline overflows the clock"))
        })
    }

    /// Deadline budget for `action`.
    pub fn timeout_for(&self, action: Action) -> Duration {
        match action {
            Action::Analyze => Duration::from_millis(self.analyze_timeout_ms),
            Action::Rephrase => Duration::from_millis(self.rephrase_timeout_ms),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Minimum input length for `action`.
    pub fn min_chars(&self, action: Action) -> usize {
        match action {
            Action::Analyze => self.min_analyze_chars,
            Action::Rephrase => self.min_rephrase_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ClientConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.timeout_for(Action::Analyze), Duration::from_secs(30));
        assert_eq!(cfg.timeout_for(Action::Rephrase), Duration::from_secs(15));
        assert_eq!(cfg.min_chars(Action::Rephrase), 10);
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = ClientConfig {
            rephrase_timeout_ms: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn oversized_timeout_rejected() {
        let cfg: ClientConfig =
            serde_json::from_str(r#"{"analyze_timeout_ms": 18446744073709551615}"#).unwrap();
        assert!(matches!(cfg.validate(), Err(ClientError::InvalidConfig(_))));

        let now = Instant::now();
        assert!(matches!(
            cfg.deadline_after(Action::Analyze, now),
            Err(ClientError::InvalidConfig(_))
        ));
        assert_eq!(
            cfg.deadline_after(Action::Rephrase, now).unwrap(),
            now + Duration::from_secs(15)
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://svc:8000/"}"#).unwrap();
        assert_eq!(cfg.base_url, "http://svc:8000/");
        assert_eq!(cfg.analyze_timeout_ms, 30_000);
    }
}
