use super::normalizer::normalize;
use super::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
use std::collections::HashMap;

/// Tokens shorter than this are not indexed.
const MIN_TOKEN_LEN: usize = 2;

/// Builds word-frequency tables from raw document text.
///
/// Runs the normalizer, then the primary tokenizer; if the primary reports
/// failure the fallback is substituted with identical output type. If both
/// fail the indexer yields an empty table so the document stays queryable
/// (with zero hits) instead of poisoning the corpus.
pub struct WordIndexer {
    primary: Box<dyn Tokenizer>,
    fallback: Box<dyn Tokenizer>,
}

impl Default for WordIndexer {
    fn default() -> Self {
        WordIndexer {
            primary: Box::new(WordTokenizer::default()),
            fallback: Box::new(WhitespaceTokenizer),
        }
    }
}

impl WordIndexer {
    pub fn new(primary: Box<dyn Tokenizer>, fallback: Box<dyn Tokenizer>) -> Self {
        WordIndexer { primary, fallback }
    }

    /// Builds the frequency table for one document.
    ///
    /// Deterministic given (text, tokenizers). Every stored count is >= 1;
    /// an absent key means the token does not occur.
    pub fn build(&self, text: &str) -> HashMap<String, usize> {
        let normalized = normalize(text);

        let tokens = match self.primary.tokenize(&normalized) {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::warn!(
                    "Primary tokenizer failed ({}), falling back to '{}'",
                    err,
                    self.fallback.name()
                );
                match self.fallback.tokenize(&normalized) {
                    Ok(tokens) => tokens,
                    Err(err) => {
                        tracing::error!("Fallback tokenizer failed ({}), indexing nothing", err);
                        return HashMap::new();
                    }
                }
            }
        };

        let mut frequencies = HashMap::new();
        for token in tokens {
            if token.len() >= MIN_TOKEN_LEN {
                *frequencies.entry(token).or_insert(0) += 1;
            }
        }

        frequencies
    }
}
