use regex::Regex;
use thiserror::Error;

/// Raised by a tokenizer that cannot produce tokens for its input.
///
/// Never surfaced past the indexing layer: the caller substitutes the
/// fallback tokenizer and, if that also fails, settles for an empty table.
#[derive(Debug, Error)]
#[error("tokenizer '{tokenizer}' failed: {reason}")]
pub struct TokenizeError {
    pub tokenizer: String,
    pub reason: String,
}

impl TokenizeError {
    pub fn new(tokenizer: &str, reason: String) -> Self {
        TokenizeError {
            tokenizer: tokenizer.to_string(),
            reason,
        }
    }
}

/// Capability contract for splitting normalized text into tokens.
///
/// Tokens are substrings of the input separated on whitespace-equivalent
/// boundaries, and tokenization is deterministic for identical input.
/// Failure is reported explicitly through the `Result` so the caller can
/// substitute a fallback implementation.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;

    fn name(&self) -> &str;
}

/// Primary tokenizer: extracts word runs with a configurable regex pattern.
pub struct WordTokenizer {
    pub pattern: String,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        WordTokenizer {
            pattern: r"[a-z0-9]+".to_string(),
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let re = Regex::new(&self.pattern)
            .map_err(|err| TokenizeError::new(self.name(), err.to_string()))?;

        Ok(re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// Fallback tokenizer: plain whitespace split. Cannot fail.
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
