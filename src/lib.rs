//! Front end for a plagiarism checker with a rephrasing assistant.
//!
//! This crate stitches the workspace together: the change highlighter, the
//! client for the analysis/rephrase service, and the controller and views
//! that turn service responses into panels, toasts and highlighted text.
//!
//! ```rust
//! use std::time::Instant;
//!
//! use plagcheck::{Action, AppConfig, Completion, Controller, RephraseResponse, SubstitutionHint};
//!
//! let cfg = AppConfig::default();
//! let mut controller = Controller::from_config(&cfg)?;
//! controller.set_rephrase_input("The cat sat on the mat.");
//!
//! let now = Instant::now();
//! let ticket = controller.begin(Action::Rephrase, now)?;
//! let resp = RephraseResponse {
//!     original_text: "The cat sat on the mat.".into(),
//!     rephrased_text: "The feline sat on the mat.".into(),
//!     changes_made: vec![SubstitutionHint::new("cat", "feline")],
//!     words_changed: 1,
//!     ..Default::default()
//! };
//! assert_eq!(controller.complete_rephrase(&ticket, Ok(resp), now), Completion::Applied);
//!
//! controller.toggle_highlighting();
//! assert!(controller.rephrase_html().unwrap().contains("Changed from: cat"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod controller;
pub mod terminal;
pub mod view;

pub use client::{
    Action, AnalyzeResponse, ClientConfig, ClientError, Creativity, RephraseRequest,
    RephraseResponse, RephraseStyle, RiskColor, ServiceClient,
};
pub use highlight::{
    highlight, Highlight, HighlightConfig, HighlightError, HighlightMode, Highlighter,
    HtmlRenderer, MarkerRenderer, Render, SubstitutionHint,
};

pub use crate::config::{AppConfig, ConfigLoadError};
pub use crate::controller::{
    AppState, Clipboard, Completion, Controller, ControllerError, Ticket, UiState,
};
pub use crate::terminal::TerminalRenderer;
pub use crate::view::{RephraseView, Toast, ToastKind, ViewConfig};
