//! Search Module
//!
//! The core component responsible for executing user queries against the
//! corpus.
//!
//! ## Overview
//! A query is classified purely by shape: if it contains whitespace it is a
//! *phrase* and is counted as a literal substring of each document's raw
//! text; otherwise it is a *word* and is looked up in each document's
//! frequency table. Either way, matching documents are ranked by occurrence
//! count (descending), with ties broken by document name for reproducible
//! output.
//!
//! ## Responsibilities
//! - **Dispatch**: Word/phrase classification and query validation.
//! - **Matching**: Overlap-aware phrase counting via two interchangeable
//!   algorithms (naive scan and a failure-function automaton).
//! - **Ranking**: Deterministic ordering of per-document results.
//! - **API**: Exposing search via a RESTful HTTP endpoint.
//!
//! ## Submodules
//! - **`engine`**: Query dispatch and ranking logic.
//! - **`matcher`**: The two phrase-counting algorithms.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Search results, typed errors, and API DTOs.

pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod types;
