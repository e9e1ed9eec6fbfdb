//! Search Data Types
//!
//! Defines the in-process search results, the typed query error, and the
//! Data Transfer Objects (DTOs) for the search API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a query was dispatched, decided purely by its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Word,
    Phrase,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Word => "word",
            SearchMode::Phrase => "phrase",
        }
    }
}

/// One matching document with its occurrence count. Zero counts are never
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub count: usize,
}

/// The ranked outcome of a dispatched query.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub mode: SearchMode,
    pub hits: Vec<SearchHit>,
}

/// Caller-input errors surfaced by the search engine.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("query is empty or whitespace-only")]
    InvalidQuery,
}

/// Response format for the search endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub mode: String,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub name: String,
    pub count: usize,
}
