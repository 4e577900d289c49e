use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::Action;

/// Checks `text` before it is sent for `action` and returns the trimmed text.
///
/// Length is counted in characters after trimming surrounding whitespace.
pub fn validate_input(action: Action, text: &str, cfg: &ClientConfig) -> Result<String, ClientError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        let message = match action {
            Action::Analyze => "Please enter some text to analyze.",
            Action::Rephrase => "Please enter some text to rephrase.",
        };
        return Err(ClientError::Validation(message.into()));
    }

    let min = cfg.min_chars(action);
    if trimmed.chars().count() < min {
        let message = match action {
            Action::Analyze => {
                format!("Please provide at least {min} characters for meaningful analysis.")
            }
            Action::Rephrase => format!("Please provide at least {min} characters for rephrasing."),
        };
        return Err(ClientError::Validation(message));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ClientConfig {
        ClientConfig::default()
    }

    #[test]
    fn empty_input_rejected_per_action() {
        let err = validate_input(Action::Analyze, "   \n", &cfg()).unwrap_err();
        assert_eq!(err.user_message(), "Please enter some text to analyze.");
        let err = validate_input(Action::Rephrase, "", &cfg()).unwrap_err();
        assert_eq!(err.user_message(), "Please enter some text to rephrase.");
    }

    #[test]
    fn short_input_rejected_with_minimum() {
        let err = validate_input(Action::Analyze, "too short", &cfg()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Please provide at least 50 characters for meaningful analysis."
        );
        let err = validate_input(Action::Rephrase, "  tiny  ", &cfg()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Please provide at least 10 characters for rephrasing."
        );
    }

    #[test]
    fn accepted_input_is_trimmed() {
        let ok = validate_input(Action::Rephrase, "  The cat sat down.  ", &cfg()).unwrap();
        assert_eq!(ok, "The cat sat down.");
    }

    #[test]
    fn minimum_counts_characters_not_bytes() {
        // Ten characters, twenty bytes.
        let text = "éééééééééé";
        assert!(validate_input(Action::Rephrase, text, &cfg()).is_ok());
        assert!(validate_input(Action::Rephrase, &text[..18], &cfg()).is_err());
    }
}
