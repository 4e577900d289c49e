//! HTML fragments for the analysis and rephrase panels.
//!
//! Every interpolated string is escaped; service responses are treated as
//! untrusted text.

use std::fmt::Write as _;

use highlight::{escape_html, word_count, Highlight, Highlighter, HtmlRenderer, Render};
use client::{Action, AnalyzeResponse, RephraseResponse, RiskColor};
use serde::{Deserialize, Serialize};

/// Placeholder shown while there are no analysis results.
pub const RESULTS_PLACEHOLDER: &str =
    "Enter text and click \"Analyze\" to see detailed plagiarism detection results";

/// Rendering knobs for the result panels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    /// How many common phrases the analysis card lists.
    pub common_phrase_limit: usize,
    /// Markup used for changed words in the highlighted pane.
    pub highlight: HtmlRenderer,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            common_phrase_limit: 5,
            highlight: HtmlRenderer::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
        }
    }
}

/// Toast text after a successful rephrase.
pub fn rephrase_success_message(words_changed: usize) -> String {
    format!("Text rephrased successfully! {words_changed} words changed.")
}

/// Text shown in the loading overlay while `action` is in flight.
pub fn loading_message(action: Action) -> &'static str {
    match action {
        Action::Analyze => "Analyzing content with advanced NLP algorithms...",
        Action::Rephrase => "Generating rephrased content...",
    }
}

/// `"N words"` label for an input box.
pub fn word_count_label(text: &str) -> String {
    format!("{} words", word_count(text))
}

/// Card class for a risk colour.
pub fn risk_class(color: &RiskColor) -> &'static str {
    match color {
        RiskColor::Danger => "high-risk",
        RiskColor::Warning => "medium-risk",
        _ => "low-risk",
    }
}

/// Label of the button that flips between the plain and highlighted panes.
pub fn toggle_label(show_changes: bool) -> &'static str {
    if show_changes {
        "Hide Changes"
    } else {
        "Show Changes"
    }
}

/// Empty-results placeholder block.
pub fn render_placeholder() -> String {
    format!(
        "<div class=\"text-center text-muted py-5\"><p>{}</p></div>",
        escape_html(RESULTS_PLACEHOLDER)
    )
}

/// Analysis result card.
pub fn render_analysis(resp: &AnalyzeResponse, cfg: &ViewConfig) -> String {
    let color = escape_html(resp.risk_color.as_str());
    let score = resp.clamped_score();
    let mut html = String::with_capacity(1024);

    let _ = write!(
        html,
        "<div class=\"result-card {} fade-in\">\
         <div class=\"d-flex justify-content-between align-items-center mb-3\">\
         <h6 class=\"mb-0\">Plagiarism Score</h6>\
         <span class=\"badge bg-{color} fs-6\">{}</span></div>",
        risk_class(&resp.risk_color),
        escape_html(&resp.plagiarism_level),
    );

    let _ = write!(
        html,
        "<div class=\"mb-3\"><div class=\"progress\">\
         <div class=\"progress-bar bg-{color}\" role=\"progressbar\" style=\"width: {score}%\" \
         aria-valuenow=\"{score}\" aria-valuemin=\"0\" aria-valuemax=\"100\">{score}%</div>\
         </div></div>",
    );

    let _ = write!(
        html,
        "<div class=\"row text-center mb-3\">\
         <div class=\"col-6\"><strong class=\"text-primary\">{}</strong><br><small class=\"text-muted\">Total Words</small></div>\
         <div class=\"col-6\"><strong class=\"text-success\">{}</strong><br><small class=\"text-muted\">Unique Words</small></div>\
         </div>",
        resp.text_analysis.total_words, resp.text_analysis.unique_words,
    );

    if !resp.issues.is_empty() {
        html.push_str("<div class=\"mt-3\"><h6>Issues Detected:</h6><ul class=\"list-unstyled\">");
        for issue in &resp.issues {
            let _ = write!(html, "<li class=\"mb-1\">{}</li>", escape_html(issue));
        }
        html.push_str("</ul></div>");
    }

    if !resp.common_phrases.is_empty() && cfg.common_phrase_limit > 0 {
        html.push_str("<div class=\"mt-3\"><h6>Common Phrases:</h6><div class=\"d-flex flex-wrap gap-1\">");
        for phrase in resp.common_phrases.iter().take(cfg.common_phrase_limit) {
            let _ = write!(
                html,
                "<span class=\"badge bg-light text-dark\">{}</span>",
                escape_html(phrase)
            );
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div>");
    html
}

/// Rendered rephrase result: both panes plus the summary data around them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RephraseView {
    pub plain_html: String,
    pub highlighted_html: String,
    pub words_changed: usize,
    pub highlighted_words: usize,
    pub toast: Toast,
}

impl RephraseView {
    /// Builds both panes for a rephrase response.
    pub fn build(resp: &RephraseResponse, highlighter: &Highlighter, cfg: &ViewConfig) -> Self {
        let highlight = highlighter.highlight(
            &resp.original_text,
            &resp.rephrased_text,
            Some(resp.changes_made.as_slice()),
        );
        Self::from_highlight(resp, &highlight, cfg)
    }

    pub fn from_highlight(resp: &RephraseResponse, highlight: &Highlight, cfg: &ViewConfig) -> Self {
        Self {
            plain_html: escape_html(&resp.rephrased_text).into_owned(),
            highlighted_html: cfg.highlight.render(&highlight.tokens),
            words_changed: resp.words_changed,
            highlighted_words: highlight.changed_words(),
            toast: Toast::success(rephrase_success_message(resp.words_changed)),
        }
    }

    /// The full rephrase panel with the pane selected by `show_changes` visible.
    pub fn render_panel(&self, show_changes: bool) -> String {
        let (plain_display, highlighted_display) = if show_changes {
            ("none", "block")
        } else {
            ("block", "none")
        };
        format!(
            "<div class=\"rephrased-content p-3\">\
             <div class=\"d-flex justify-content-between align-items-center mb-3\">\
             <h6 class=\"mb-0 text-success\">Rephrased Text</h6>\
             <div><span class=\"badge bg-info me-2\">{} words changed</span>\
             <button class=\"btn btn-sm btn-outline-secondary\" id=\"highlightToggle\">{}</button></div></div>\
             <div id=\"rephrasedContent\" style=\"display: {plain_display};\">{}</div>\
             <div id=\"highlightedContent\" style=\"display: {highlighted_display};\">{}</div>\
             </div>",
            self.words_changed,
            toggle_label(show_changes),
            self.plain_html,
            self.highlighted_html,
        )
    }
}

/// Toast markup.
pub fn render_toast(toast: &Toast) -> String {
    let icon = match toast.kind {
        ToastKind::Success => "fas fa-check-circle text-success",
        ToastKind::Error => "fas fa-exclamation-circle text-danger",
    };
    format!(
        "<div class=\"toast\" role=\"alert\" aria-live=\"assertive\" aria-atomic=\"true\">\
         <div class=\"toast-header\"><i class=\"{icon} me-2\"></i><strong class=\"me-auto\">{}</strong>\
         <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"toast\" aria-label=\"Close\"></button></div>\
         <div class=\"toast-body\">{}</div></div>",
        toast.title(),
        escape_html(&toast.message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::TextAnalysis;
    use highlight::SubstitutionHint;

    fn analysis(color: &str) -> AnalyzeResponse {
        AnalyzeResponse {
            plagiarism_score: 72.0,
            plagiarism_level: "High".into(),
            risk_color: RiskColor::from(color.to_string()),
            text_analysis: TextAnalysis {
                total_words: 120,
                unique_words: 80,
                ..Default::default()
            },
            issues: vec!["Copied <b>phrases</b>".into()],
            common_phrases: (1..=7).map(|i| format!("phrase {i}")).collect(),
            suspicious_patterns: None,
        }
    }

    #[test]
    fn risk_classes() {
        assert_eq!(risk_class(&RiskColor::Danger), "high-risk");
        assert_eq!(risk_class(&RiskColor::Warning), "medium-risk");
        assert_eq!(risk_class(&RiskColor::Info), "low-risk");
        assert_eq!(risk_class(&RiskColor::Other("teal".into())), "low-risk");
    }

    #[test]
    fn analysis_card_contents() {
        let html = render_analysis(&analysis("danger"), &ViewConfig::default());
        assert!(html.starts_with("<div class=\"result-card high-risk fade-in\">"));
        assert!(html.contains("bg-danger fs-6\">High</span>"));
        assert!(html.contains("style=\"width: 72%\""));
        assert!(html.contains(">120</strong>"));
        assert!(html.contains(">80</strong>"));
        assert!(html.contains("Copied &lt;b&gt;phrases&lt;/b&gt;"));
        assert!(html.contains("phrase 5"));
        assert!(!html.contains("phrase 6"));
    }

    #[test]
    fn analysis_card_skips_empty_lists() {
        let mut resp = analysis("success");
        resp.issues.clear();
        resp.common_phrases.clear();
        let html = render_analysis(&resp, &ViewConfig::default());
        assert!(!html.contains("Issues Detected"));
        assert!(!html.contains("Common Phrases"));
        assert!(html.contains("low-risk"));
    }

    #[test]
    fn rephrase_view_panes() {
        let resp = RephraseResponse {
            original_text: "The cat sat.".into(),
            rephrased_text: "The feline sat.".into(),
            changes_made: vec![SubstitutionHint::new("cat", "feline")],
            words_changed: 1,
            ..Default::default()
        };
        let view = RephraseView::build(&resp, &Highlighter::default(), &ViewConfig::default());
        assert_eq!(view.plain_html, "The feline sat.");
        assert!(view.highlighted_html.contains("title=\"Changed from: cat\""));
        assert_eq!(view.highlighted_words, 1);
        assert_eq!(view.toast, Toast::success("Text rephrased successfully! 1 words changed."));

        let hidden = view.render_panel(false);
        assert!(hidden.contains("Show Changes"));
        assert!(hidden.contains("id=\"highlightedContent\" style=\"display: none;\""));
        let shown = view.render_panel(true);
        assert!(shown.contains("Hide Changes"));
        assert!(shown.contains("id=\"rephrasedContent\" style=\"display: none;\""));
    }

    #[test]
    fn toast_and_labels() {
        let html = render_toast(&Toast::error("Bad <input>"));
        assert!(html.contains("<strong class=\"me-auto\">Error</strong>"));
        assert!(html.contains("Bad &lt;input&gt;"));
        assert_eq!(word_count_label("  one two\nthree "), "3 words");
        assert_eq!(word_count_label("   "), "0 words");
        assert!(render_placeholder().contains("click &quot;Analyze&quot; to see"));
        assert_eq!(loading_message(Action::Rephrase), "Generating rephrased content...");
    }
}
