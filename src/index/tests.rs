//! Index Module Tests
//!
//! Validates the text analysis pipeline: normalization, tokenization (with
//! fallback), and frequency counting.
//!
//! ## Test Scopes
//! - **Normalizer**: Canonical form is lowercase, ASCII alphanumeric + single spaces.
//! - **Tokenizer**: Primary/fallback contract and deterministic splitting.
//! - **WordIndexer**: End-to-end table building and failure absorption.

#[cfg(test)]
mod tests {
    use crate::index::normalizer::normalize;
    use crate::index::tokenizer::{Tokenizer, WhitespaceTokenizer, WordTokenizer};
    use crate::index::word_index::WordIndexer;

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World! How's it going?"), "hello world hows it going");
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("Rust 2024 edition"), "rust 2024 edition");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  too   many\t\tspaces\n\nhere  "), "too many spaces here");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_only_punctuation() {
        assert_eq!(normalize("!!! ??? ***"), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        // Non-ASCII letters are removed, not transliterated
        assert_eq!(normalize("café"), "caf");
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_word_tokenizer_splits_on_whitespace() {
        let tokenizer = WordTokenizer::default();
        let tokens = tokenizer.tokenize("hello world again").unwrap();
        assert_eq!(tokens, vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_word_tokenizer_is_deterministic() {
        let tokenizer = WordTokenizer::default();
        let first = tokenizer.tokenize("alpha beta gamma").unwrap();
        let second = tokenizer.tokenize("alpha beta gamma").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_word_tokenizer_invalid_pattern_fails() {
        let tokenizer = WordTokenizer {
            pattern: "[unclosed".to_string(),
        };
        let err = tokenizer.tokenize("some text").unwrap_err();
        assert_eq!(err.tokenizer, "word");
    }

    #[test]
    fn test_whitespace_tokenizer_matches_primary_on_normalized_text() {
        let primary = WordTokenizer::default();
        let fallback = WhitespaceTokenizer;
        let text = normalize("The quick brown fox, the lazy dog.");

        assert_eq!(
            primary.tokenize(&text).unwrap(),
            fallback.tokenize(&text).unwrap()
        );
    }

    #[test]
    fn test_whitespace_tokenizer_empty_input() {
        let tokens = WhitespaceTokenizer.tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    // ============================================================
    // WORD INDEXER TESTS
    // ============================================================

    #[test]
    fn test_build_counts_occurrences() {
        let indexer = WordIndexer::default();
        let table = indexer.build("apple banana apple cherry apple banana");

        assert_eq!(table.get("apple"), Some(&3));
        assert_eq!(table.get("banana"), Some(&2));
        assert_eq!(table.get("cherry"), Some(&1));
    }

    #[test]
    fn test_build_discards_single_char_tokens() {
        let indexer = WordIndexer::default();
        let table = indexer.build("a b c an ox");

        assert!(!table.contains_key("a"));
        assert!(!table.contains_key("b"));
        assert_eq!(table.get("an"), Some(&1));
        assert_eq!(table.get("ox"), Some(&1));
    }

    #[test]
    fn test_build_normalizes_before_counting() {
        let indexer = WordIndexer::default();
        let table = indexer.build("Apple! APPLE? apple.");

        assert_eq!(table.get("apple"), Some(&3));
        assert!(!table.contains_key("Apple"));
    }

    #[test]
    fn test_build_empty_text_yields_empty_table() {
        let indexer = WordIndexer::default();
        assert!(indexer.build("").is_empty());
        assert!(indexer.build("   \n\t  ").is_empty());
    }

    #[test]
    fn test_build_falls_back_when_primary_fails() {
        let broken_primary = Box::new(WordTokenizer {
            pattern: "[broken".to_string(),
        });
        let indexer = WordIndexer::new(broken_primary, Box::new(WhitespaceTokenizer));
        let table = indexer.build("fallback still works works");

        assert_eq!(table.get("fallback"), Some(&1));
        assert_eq!(table.get("works"), Some(&2));
    }

    #[test]
    fn test_build_empty_table_when_both_tokenizers_fail() {
        let broken_primary = Box::new(WordTokenizer {
            pattern: "[broken".to_string(),
        });
        let broken_fallback = Box::new(WordTokenizer {
            pattern: "(also broken".to_string(),
        });
        let indexer = WordIndexer::new(broken_primary, broken_fallback);

        assert!(indexer.build("unindexable content").is_empty());
    }

    #[test]
    fn test_build_every_count_is_positive() {
        let indexer = WordIndexer::default();
        let table = indexer.build("one two two three three three");

        for (token, count) in &table {
            assert!(*count >= 1, "token '{}' stored with count 0", token);
        }
    }
}
