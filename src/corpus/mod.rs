//! Corpus Module
//!
//! The in-memory document store at the heart of the service.
//!
//! ## Overview
//! A `Corpus` owns one record per document: its name, its raw text, and the
//! word-frequency table derived from that text. Keeping all three in a single
//! record means the raw text and the index can never drift apart — replacing
//! a document swaps the whole record atomically.
//!
//! ## Responsibilities
//! - **Mutation**: Adding (or replacing) and removing documents.
//! - **Statistics**: Per-document word totals, unique counts, and character counts.
//! - **Vocabulary**: The sorted set of all indexed tokens across documents.
//! - **API**: HTTP request handlers for the Axum web server.
//!
//! ## Submodules
//! - **`store`**: The `Corpus` itself.
//! - **`handlers`**: HTTP request handlers for document management.
//! - **`types`**: Domain records, typed errors, and API DTOs.

pub mod handlers;
pub mod store;
pub mod types;
