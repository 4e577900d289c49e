use colored::Colorize;
use highlight::{AnnotatedToken, Render};

/// Paints changed words for a colour terminal.
///
/// Colour output follows `colored`'s global switches (`NO_COLOR`,
/// `CLICOLOR_FORCE`); with colour off the words print as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalRenderer {
    /// Print the replaced word, dimmed, after each changed word.
    pub show_original: bool,
}

impl Render for TerminalRenderer {
    type Output = String;

    fn render(&self, tokens: &[AnnotatedToken]) -> String {
        let mut out = String::new();
        for token in tokens {
            if !token.changed {
                out.push_str(&token.text);
                continue;
            }
            out.push_str(&token.text.as_str().on_green().black().to_string());
            if let (true, Some(original)) = (self.show_original, &token.matched_original) {
                out.push_str(&format!("({})", original).dimmed().to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_colour_disabled() {
        colored::control::set_override(false);
        let tokens = vec![
            AnnotatedToken::unchanged("The"),
            AnnotatedToken::unchanged(" "),
            AnnotatedToken::changed("feline", Some("cat".into())),
        ];
        assert_eq!(TerminalRenderer::default().render(&tokens), "The feline");
        assert_eq!(
            TerminalRenderer { show_original: true }.render(&tokens),
            "The feline(cat)"
        );
        colored::control::unset_override();
    }
}
