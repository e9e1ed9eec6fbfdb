use super::types::{CorpusError, Document, DocumentStats};
use crate::index::word_index::WordIndexer;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle used by the HTTP layer.
///
/// Mutations (add/remove/ingest) take the write lock; searches, stats, and
/// vocabulary listings take read locks and may run concurrently with each
/// other but never with a mutation.
pub type SharedCorpus = Arc<RwLock<Corpus>>;

/// The in-memory collection of all loaded documents and their derived indices.
pub struct Corpus {
    documents: HashMap<String, Document>,
    indexer: WordIndexer,
}

impl Default for Corpus {
    fn default() -> Self {
        Corpus::new()
    }
}

impl Corpus {
    pub fn new() -> Self {
        Corpus::with_indexer(WordIndexer::default())
    }

    pub fn with_indexer(indexer: WordIndexer) -> Self {
        Corpus {
            documents: HashMap::new(),
            indexer,
        }
    }

    /// Stores a document, replacing any prior entry with the same name.
    ///
    /// The raw text and the rebuilt frequency table are swapped in as one
    /// record. Re-adding an existing name is an overwrite, not an error.
    pub fn add(&mut self, name: &str, text: &str) -> Result<(), CorpusError> {
        if text.trim().is_empty() {
            return Err(CorpusError::EmptyContent(name.to_string()));
        }

        let frequencies = self.indexer.build(text);
        self.documents.insert(
            name.to_string(),
            Document {
                name: name.to_string(),
                text: text.to_string(),
                frequencies,
            },
        );

        Ok(())
    }

    /// Removes a document. Returns whether it was present; absence is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        self.documents.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Per-document metrics, ordered by document name for deterministic output.
    pub fn stats(&self) -> Vec<DocumentStats> {
        let mut stats: Vec<DocumentStats> = self
            .documents
            .values()
            .map(|doc| DocumentStats {
                name: doc.name.clone(),
                total_words: doc.frequencies.values().sum(),
                unique_words: doc.frequencies.len(),
                characters: doc.text.chars().count(),
            })
            .collect();

        stats.sort_by(|a, b| a.name.cmp(&b.name));
        stats
    }

    /// The set of all indexed tokens across all documents, sorted
    /// lexicographically.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = BTreeSet::new();
        for doc in self.documents.values() {
            words.extend(doc.frequencies.keys().map(String::as_str));
        }

        words.into_iter().map(str::to_string).collect()
    }
}
