//! HTTP client for the plagiarism analysis and rephrasing service.
//!
//! The service exposes two JSON endpoints, `POST analyze` and
//! `POST rephrase`, relative to a configurable base URL. This crate owns the
//! wire types, input validation, deadlines and the mapping of every failure to
//! a message fit for the user.
//!
//! ```rust,no_run
//! use client::{ClientConfig, RephraseRequest, ServiceClient};
//!
//! # async fn run() -> Result<(), client::ClientError> {
//! let client = ServiceClient::new(ClientConfig::default())?;
//! let resp = client.rephrase(RephraseRequest::new("The cat sat on the mat.")).await?;
//! println!("{} words changed", resp.words_changed);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;
mod validate;

pub use crate::client::ServiceClient;
pub use crate::config::{ClientConfig, MAX_TIMEOUT_MS};
pub use crate::error::{ClientError, NETWORK_ERROR_MESSAGE, TIMEOUT_MESSAGE};
pub use crate::types::{
    Action, AnalyzeRequest, AnalyzeResponse, Creativity, ErrorBody, RephraseRequest,
    RephraseResponse, RephraseStyle, RiskColor, TextAnalysis,
};
pub use crate::validate::validate_input;
