//! Corpus Data Types
//!
//! Defines the owned document record, the typed errors surfaced to callers,
//! and the Data Transfer Objects (DTOs) for the document management API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// One document owned by the corpus.
///
/// The raw text is immutable once stored; the frequency table is derived from
/// it exactly once, when the document is added or replaced. Holding both in
/// one record keeps them consistent by construction.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub text: String,
    pub frequencies: HashMap<String, usize>,
}

/// Per-document metrics reported by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub name: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub characters: usize,
}

/// Caller-input errors surfaced by corpus mutations.
#[derive(Debug, Error, PartialEq)]
pub enum CorpusError {
    #[error("document '{0}' has no usable text content")]
    EmptyContent(String),
}

/// Request body for adding a document directly with its content.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddDocumentRequest {
    pub name: String,
    pub content: String,
}

/// Response returned after an add attempt.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddDocumentResponse {
    pub name: String,
    pub status: String,
}

/// Response returned after a remove attempt.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveDocumentResponse {
    pub name: String,
    pub status: String,
}

/// Response format for the stats endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub count: usize,
    pub documents: Vec<DocumentStats>,
}

/// Response format for the vocabulary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub count: usize,
    pub words: Vec<String>,
}
