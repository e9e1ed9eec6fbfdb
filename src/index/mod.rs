//! Indexing Module
//!
//! The text analysis pipeline that turns raw document text into a
//! word-frequency table.
//!
//! ## Pipeline
//! 1. **Normalization**: Lowercase the text and strip everything that is not
//!    an ASCII letter, ASCII digit, or whitespace.
//! 2. **Tokenization**: Split the normalized text into tokens. The primary
//!    tokenizer may fail; a whitespace fallback is always available.
//! 3. **Counting**: Discard single-character tokens and count the rest.
//!
//! ## Submodules
//! - **`normalizer`**: Canonical text form (pure function).
//! - **`tokenizer`**: The `Tokenizer` capability contract plus the primary and
//!   fallback implementations.
//! - **`word_index`**: The `WordIndexer` that runs the full pipeline.

pub mod normalizer;
pub mod tokenizer;
pub mod word_index;

#[cfg(test)]
mod tests;
