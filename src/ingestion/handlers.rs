use super::types::{IngestRequest, IngestResponse};
use crate::corpus::store::SharedCorpus;
use anyhow::Result;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_ATTEMPTS: usize = 3;

pub async fn handle_ingest(
    Extension(corpus): Extension<SharedCorpus>,
    Json(req): Json<IngestRequest>,
) -> (StatusCode, Json<IngestResponse>) {
    if corpus.read().await.contains(&req.name) {
        return (
            StatusCode::OK,
            Json(IngestResponse {
                name: req.name,
                status: "already_exists".to_string(),
                source_url: req.url,
            }),
        );
    }

    let text = match fetch_text(&req.url).await {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("Failed to download '{}' from {}: {}", req.name, req.url, err);
            return (
                StatusCode::BAD_GATEWAY,
                Json(IngestResponse {
                    name: req.name,
                    status: "download_failed".to_string(),
                    source_url: req.url,
                }),
            );
        }
    };

    if let Err(err) = corpus.write().await.add(&req.name, &text) {
        tracing::warn!("Rejected downloaded document '{}': {}", req.name, err);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(IngestResponse {
                name: req.name,
                status: "empty_content".to_string(),
                source_url: req.url,
            }),
        );
    }

    tracing::info!("Ingested '{}' from {}", req.name, req.url);
    (
        StatusCode::ACCEPTED,
        Json(IngestResponse {
            name: req.name,
            status: "ingested".to_string(),
            source_url: req.url,
        }),
    )
}

/// Downloads plain text with bounded retries and jittered backoff.
async fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::Client::new();
    let mut delay_ms = 150u64;

    for attempt in 0..FETCH_ATTEMPTS {
        let response = client.get(url).timeout(FETCH_TIMEOUT).send().await;

        match response {
            Ok(resp) => {
                if !resp.status().is_success() {
                    return Err(anyhow::anyhow!("request failed: {}", resp.status()));
                }
                return Ok(resp.text().await?);
            }
            Err(e) => {
                if attempt + 1 == FETCH_ATTEMPTS {
                    return Err(anyhow::anyhow!(e));
                }
                let jitter = rand::random::<u64>() % 50;
                tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                delay_ms = (delay_ms * 2).min(1200);
            }
        }
    }

    Err(anyhow::anyhow!("Retry attempts exhausted"))
}
