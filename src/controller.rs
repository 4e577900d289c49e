//! Application state and the UI state machine for the two actions.
//!
//! The controller never performs I/O. A caller asks it to [`begin`] an
//! action, runs the request however it likes (the CLI uses
//! [`client::ServiceClient`]), and hands the result back through
//! [`complete_analyze`] or [`complete_rephrase`]. Deadlines are plain
//! [`Instant`]s; [`tick`] fails an action whose deadline has passed, and a
//! result arriving after that is discarded.
//!
//! [`begin`]: Controller::begin
//! [`complete_analyze`]: Controller::complete_analyze
//! [`complete_rephrase`]: Controller::complete_rephrase
//! [`tick`]: Controller::tick

use std::time::Instant;

use client::{
    validate_input, Action, AnalyzeResponse, ClientConfig, ClientError, Creativity,
    RephraseRequest, RephraseResponse, RephraseStyle, TIMEOUT_MESSAGE,
};
use highlight::{HighlightError, Highlighter, SubstitutionHint};
use thiserror::Error;

use crate::config::AppConfig;
use crate::view::{self, RephraseView, Toast, ViewConfig};

/// Toast text after a successful copy.
pub const COPY_SUCCESS_MESSAGE: &str = "Rephrased text copied to clipboard!";
/// Toast text when the clipboard refuses the write.
pub const COPY_FAILURE_MESSAGE: &str = "Failed to copy text to clipboard.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// An action is already in flight.
    #[error("another request is still in progress")]
    Busy,
    #[error("there is no rephrased text yet")]
    NothingToCopy,
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Where the UI currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading {
        action: Action,
        ticket: u64,
        deadline: Instant,
    },
    Success(Action),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }
}

/// Handle for one in-flight action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub action: Action,
    /// Validated, trimmed input text.
    pub text: String,
    pub style: RephraseStyle,
    pub creativity: Creativity,
    pub deadline: Instant,
}

impl Ticket {
    pub fn rephrase_request(&self) -> RephraseRequest {
        RephraseRequest::new(self.text.clone())
            .with_style(self.style)
            .with_creativity(self.creativity)
    }
}

/// What happened to a delivered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket was stale or its deadline had passed.
    Discarded,
}

/// Destination for the copy action.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Everything the page used to keep in globals and input boxes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub analyze_input: String,
    pub rephrase_input: String,
    pub style: RephraseStyle,
    pub creativity: Creativity,
    pub last_analysis: Option<AnalyzeResponse>,
    pub current_rephrased_text: Option<String>,
    pub current_original_text: Option<String>,
    pub current_changes: Vec<SubstitutionHint>,
    pub rephrase_view: Option<RephraseView>,
    pub show_changes: bool,
}

#[derive(Debug)]
pub struct Controller {
    state: AppState,
    ui: UiState,
    client: ClientConfig,
    view: ViewConfig,
    highlighter: Highlighter,
    toasts: Vec<Toast>,
    next_ticket: u64,
}

impl Controller {
    pub fn new(client: ClientConfig, view: ViewConfig, highlighter: Highlighter) -> Self {
        Self {
            state: AppState::default(),
            ui: UiState::Idle,
            client,
            view,
            highlighter,
            toasts: Vec::new(),
            next_ticket: 1,
        }
    }

    /// Builds a controller from a loaded [`AppConfig`].
    pub fn from_config(cfg: &AppConfig) -> Result<Self, HighlightError> {
        let highlighter = Highlighter::new(cfg.highlight.clone())?;
        Ok(Self::new(cfg.client.clone(), cfg.view.clone(), highlighter))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn set_analyze_input(&mut self, text: impl Into<String>) {
        self.state.analyze_input = text.into();
    }

    pub fn set_rephrase_input(&mut self, text: impl Into<String>) {
        self.state.rephrase_input = text.into();
    }

    pub fn set_rephrase_options(&mut self, style: RephraseStyle, creativity: Creativity) {
        self.state.style = style;
        self.state.creativity = creativity;
    }

    /// Word counter label for the analyze input.
    pub fn word_count_label(&self) -> String {
        view::word_count_label(&self.state.analyze_input)
    }

    /// Loading overlay text, if an action is in flight.
    pub fn loading_message(&self) -> Option<&'static str> {
        match self.ui {
            UiState::Loading { action, .. } => Some(view::loading_message(action)),
            _ => None,
        }
    }

    /// Starts `action` on the current input for that action.
    ///
    /// Validation failures push an error toast and move to
    /// [`UiState::Error`]; a second action while one is loading is refused
    /// without touching state.
    pub fn begin(&mut self, action: Action, now: Instant) -> Result<Ticket, ControllerError> {
        if self.ui.is_loading() {
            return Err(ControllerError::Busy);
        }

        let input = match action {
            Action::Analyze => &self.state.analyze_input,
            Action::Rephrase => &self.state.rephrase_input,
        };
        let text = match validate_input(action, input, &self.client) {
            Ok(text) => text,
            Err(err) => {
                self.fail(err.user_message());
                return Err(err.into());
            }
        };

        let deadline = match self.client.deadline_after(action, now) {
            Ok(deadline) => deadline,
            Err(err) => {
                self.fail(err.user_message());
                return Err(err.into());
            }
        };

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.ui = UiState::Loading {
            action,
            ticket: id,
            deadline,
        };
        tracing::debug!(%action, ticket = id, "action started");

        Ok(Ticket {
            id,
            action,
            text,
            style: self.state.style,
            creativity: self.state.creativity,
            deadline,
        })
    }

    /// Fails the in-flight action once its deadline has passed.
    ///
    /// Returns `true` when this call performed the transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.ui {
            UiState::Loading {
                action, deadline, ..
            } if now >= deadline => {
                tracing::warn!(%action, "action deadline elapsed");
                self.fail(TIMEOUT_MESSAGE.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn complete_analyze(
        &mut self,
        ticket: &Ticket,
        result: Result<AnalyzeResponse, ClientError>,
        now: Instant,
    ) -> Completion {
        if !self.accepts(ticket, now) {
            return Completion::Discarded;
        }
        match result {
            Ok(resp) => {
                self.state.last_analysis = Some(resp);
                self.ui = UiState::Success(Action::Analyze);
            }
            Err(err) => self.fail(err.user_message()),
        }
        Completion::Applied
    }

    pub fn complete_rephrase(
        &mut self,
        ticket: &Ticket,
        result: Result<RephraseResponse, ClientError>,
        now: Instant,
    ) -> Completion {
        if !self.accepts(ticket, now) {
            return Completion::Discarded;
        }
        match result {
            Ok(resp) => {
                let rendered = RephraseView::build(&resp, &self.highlighter, &self.view);
                self.toasts.push(rendered.toast.clone());
                self.state.current_rephrased_text = Some(resp.rephrased_text);
                self.state.current_original_text = Some(resp.original_text);
                self.state.current_changes = resp.changes_made;
                self.state.rephrase_view = Some(rendered);
                self.state.show_changes = false;
                self.ui = UiState::Success(Action::Rephrase);
            }
            Err(err) => self.fail(err.user_message()),
        }
        Completion::Applied
    }

    /// Flips between the plain and highlighted panes; returns the new setting.
    pub fn toggle_highlighting(&mut self) -> bool {
        self.state.show_changes = !self.state.show_changes;
        self.state.show_changes
    }

    /// Writes the current rephrased text to `clipboard`.
    pub fn copy_rephrased<C: Clipboard>(&mut self, clipboard: &mut C) -> Result<(), ControllerError> {
        let text = self
            .state
            .current_rephrased_text
            .as_deref()
            .ok_or(ControllerError::NothingToCopy)?;
        match clipboard.write_text(text) {
            Ok(()) => {
                self.toasts.push(Toast::success(COPY_SUCCESS_MESSAGE));
                Ok(())
            }
            Err(reason) => {
                self.toasts.push(Toast::error(COPY_FAILURE_MESSAGE));
                Err(ControllerError::Clipboard(reason))
            }
        }
    }

    /// Moves the rephrased text into the analyze input and starts an analysis.
    pub fn check_rephrased(&mut self, now: Instant) -> Result<Ticket, ControllerError> {
        if self.ui.is_loading() {
            return Err(ControllerError::Busy);
        }
        let text = self
            .state
            .current_rephrased_text
            .clone()
            .ok_or(ControllerError::NothingToCopy)?;
        self.state.analyze_input = text;
        self.begin(Action::Analyze, now)
    }

    /// Runs the rephrase again on the same input and options.
    pub fn regenerate(&mut self, now: Instant) -> Result<Ticket, ControllerError> {
        self.begin(Action::Rephrase, now)
    }

    /// Empties the analyze input and its results.
    pub fn clear_analysis(&mut self) {
        self.state.analyze_input.clear();
        self.state.last_analysis = None;
        if !self.ui.is_loading() {
            self.ui = UiState::Idle;
        }
    }

    /// Analysis panel HTML, or the placeholder when there is nothing to show.
    pub fn results_html(&self) -> String {
        match &self.state.last_analysis {
            Some(resp) => view::render_analysis(resp, &self.view),
            None => view::render_placeholder(),
        }
    }

    /// Rephrase panel HTML honouring the current toggle.
    pub fn rephrase_html(&self) -> Option<String> {
        self.state
            .rephrase_view
            .as_ref()
            .map(|v| v.render_panel(self.state.show_changes))
    }

    /// Drains pending notifications, oldest first.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    fn accepts(&self, ticket: &Ticket, now: Instant) -> bool {
        match self.ui {
            UiState::Loading {
                ticket: current,
                deadline,
                ..
            } if current == ticket.id => {
                if now >= deadline {
                    tracing::warn!(action = %ticket.action, ticket = ticket.id, "late response discarded");
                    false
                } else {
                    true
                }
            }
            _ => {
                tracing::debug!(action = %ticket.action, ticket = ticket.id, "stale response discarded");
                false
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.toasts.push(Toast::error(message.clone()));
        self.ui = UiState::Error(message);
    }
}
