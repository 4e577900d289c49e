use serde::{Deserialize, Serialize};

/// Whether a token is a run of word characters or a run of whitespace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Separator,
}

impl TokenKind {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            TokenKind::Separator
        } else {
            TokenKind::Word
        }
    }
}

/// A token with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text, punctuation included.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
    pub kind: TokenKind,
}

impl Token {
    fn slice(source: &str, start: usize, end: usize, kind: TokenKind) -> Self {
        Self {
            text: source[start..end].to_string(),
            start,
            end,
            kind,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits `text` into alternating word and whitespace runs.
///
/// Whitespace runs are kept as separator tokens, so concatenating the
/// returned tokens in order gives back `text` byte for byte. Punctuation stays
/// attached to its word.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, TokenKind)> = None;

    for (idx, ch) in text.char_indices() {
        let kind = TokenKind::of(ch);
        match current {
            Some((_, run_kind)) if run_kind == kind => {}
            Some((start, run_kind)) => {
                tokens.push(Token::slice(text, start, idx, run_kind));
                current = Some((idx, kind));
            }
            None => current = Some((idx, kind)),
        }
    }

    if let Some((start, kind)) = current {
        tokens.push(Token::slice(text, start, text.len(), kind));
    }

    tokens
}

/// Concatenates token texts back into a single string.
pub fn reconstruct<T: AsRef<str>>(tokens: &[T]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.as_ref().len()).sum());
    for token in tokens {
        out.push_str(token.as_ref());
    }
    out
}

/// Counts word tokens the way the input word counters do: whitespace split
/// of the trimmed text, zero for blank input.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
