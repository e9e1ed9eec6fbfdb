use super::engine;
use super::types::{SearchResponse, SearchResultItem};
use crate::corpus::store::SharedCorpus;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(corpus): Extension<SharedCorpus>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let corpus = corpus.read().await;
    let outcome = engine::search(&corpus, &params.q)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    let limit = params.limit.unwrap_or(10);
    let offset = params.offset.unwrap_or(0);
    let total_count = outcome.hits.len();

    let results: Vec<SearchResultItem> = outcome
        .hits
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|hit| SearchResultItem {
            name: hit.name,
            count: hit.count,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: params.q,
        mode: outcome.mode.as_str().to_string(),
        total_count,
        count: results.len(),
        results,
    }))
}
