//! Ingestion Data Types
//!
//! Defines the Data Transfer Objects (DTOs) used by the remote ingestion
//! endpoint.

use serde::{Deserialize, Serialize};

/// Request to download a remote plain-text document into the corpus.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestRequest {
    pub name: String,
    pub url: String,
}

/// Response returned to the client after the ingestion request is processed.
///
/// Indicates whether the download and the corpus insertion were successful;
/// the source URL is echoed back for provenance.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub name: String,
    pub status: String,
    pub source_url: String,
}
