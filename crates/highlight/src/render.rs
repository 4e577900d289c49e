//! Renderers turning annotated tokens into displayable text.
//!
//! The core decides *which* tokens changed; a [`Render`] implementation
//! decides what that looks like. Two are provided here:
//!
//! - [`HtmlRenderer`]: an escaped HTML fragment with changed words wrapped in
//!   a `<span>` carrying a "Changed from: X" tooltip.
//! - [`MarkerRenderer`]: plain text with `[+word]` / `[+word|original]`
//!   markers, handy for logs and terminals without colour.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotatedToken;

/// Turns an annotated token sequence into some output form.
pub trait Render {
    type Output;

    fn render(&self, tokens: &[AnnotatedToken]) -> Self::Output;
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// HTML fragment renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlRenderer {
    /// CSS class on the wrapping span.
    pub class_name: String,
    /// Prefix of the provenance tooltip.
    pub label_prefix: String,
    /// Emit `data-bs-toggle="tooltip"` so the page can activate tooltips.
    pub tooltip_toggle: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            class_name: "highlight-change".into(),
            label_prefix: "Changed from: ".into(),
            tooltip_toggle: true,
        }
    }
}

impl Render for HtmlRenderer {
    type Output = String;

    fn render(&self, tokens: &[AnnotatedToken]) -> String {
        let mut html = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum::<usize>() * 2);

        for token in tokens {
            if !token.changed {
                html.push_str(&escape_html(&token.text));
                continue;
            }

            html.push_str("<span class=\"");
            html.push_str(&escape_html(&self.class_name));
            html.push('"');
            if let Some(original) = &token.matched_original {
                html.push_str(" title=\"");
                html.push_str(&escape_html(&self.label_prefix));
                html.push_str(&escape_html(original));
                html.push('"');
                if self.tooltip_toggle {
                    html.push_str(" data-bs-toggle=\"tooltip\"");
                }
            }
            html.push('>');
            html.push_str(&escape_html(&token.text));
            html.push_str("</span>");
        }

        html
    }
}

/// Plain-text marker renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerRenderer {
    /// Append `|original` inside the marker when provenance is known.
    pub show_original: bool,
}

impl Render for MarkerRenderer {
    type Output = String;

    fn render(&self, tokens: &[AnnotatedToken]) -> String {
        let mut out = String::new();
        for token in tokens {
            if !token.changed {
                out.push_str(&token.text);
                continue;
            }
            out.push_str("[+");
            out.push_str(&token.text);
            if let (true, Some(original)) = (self.show_original, &token.matched_original) {
                out.push('|');
                out.push_str(original);
            }
            out.push(']');
        }
        out
    }
}
