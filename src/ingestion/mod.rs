//! Ingestion Module
//!
//! Handles the acquisition, decoding, and storage of documents from external
//! sources.
//!
//! ## Workflow
//! 1. **Decode**: Turns raw file bytes into text (UTF-8, with a Latin-1
//!    fallback for legacy files).
//! 2. **Load**: Scans the documents folder at startup and adds every
//!    supported file to the corpus; a bad file is logged and skipped.
//! 3. **Fetch**: Downloads remote plain text over HTTP on request and adds it
//!    to the corpus.

pub mod decoder;
pub mod handlers;
pub mod loader;
pub mod types;
