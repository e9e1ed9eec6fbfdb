//! In-Memory Document Search Engine Library
//!
//! This library crate defines the core modules that make up the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`index`**: The text analysis pipeline. Normalizes raw text, tokenizes it
//!   (with a guaranteed whitespace fallback), and builds per-document
//!   word-frequency tables.
//! - **`corpus`**: The in-memory document store. Owns every document together
//!   with its raw text and derived frequency table, and exposes add/remove
//!   plus aggregate statistics.
//! - **`search`**: The query layer. Classifies queries as word or phrase
//!   lookups, counts phrase occurrences with two interchangeable matching
//!   algorithms, and ranks results by occurrence count.
//! - **`ingestion`**: The data intake pipeline. Decodes documents from disk,
//!   loads a documents folder at startup, and downloads remote plain text
//!   over HTTP.

pub mod corpus;
pub mod index;
pub mod ingestion;
pub mod search;
