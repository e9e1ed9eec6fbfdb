use super::store::SharedCorpus;
use super::types::{
    AddDocumentRequest, AddDocumentResponse, RemoveDocumentResponse, StatsResponse, WordsResponse,
};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};

pub async fn handle_add_document(
    Extension(corpus): Extension<SharedCorpus>,
    Json(req): Json<AddDocumentRequest>,
) -> (StatusCode, Json<AddDocumentResponse>) {
    let mut corpus = corpus.write().await;
    let replacing = corpus.contains(&req.name);

    match corpus.add(&req.name, &req.content) {
        Ok(()) => {
            tracing::info!("Added document '{}'", req.name);
            let status = if replacing { "replaced" } else { "added" };
            (
                StatusCode::CREATED,
                Json(AddDocumentResponse {
                    name: req.name,
                    status: status.to_string(),
                }),
            )
        }
        Err(err) => {
            tracing::warn!("Rejected document '{}': {}", req.name, err);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AddDocumentResponse {
                    name: req.name,
                    status: "empty_content".to_string(),
                }),
            )
        }
    }
}

pub async fn handle_remove_document(
    Path(name): Path<String>,
    Extension(corpus): Extension<SharedCorpus>,
) -> (StatusCode, Json<RemoveDocumentResponse>) {
    let removed = corpus.write().await.remove(&name);
    let status = if removed {
        tracing::info!("Removed document '{}'", name);
        "removed"
    } else {
        "absent"
    };

    (
        StatusCode::OK,
        Json(RemoveDocumentResponse {
            name,
            status: status.to_string(),
        }),
    )
}

pub async fn handle_stats(
    Extension(corpus): Extension<SharedCorpus>,
) -> Json<StatsResponse> {
    let documents = corpus.read().await.stats();

    Json(StatsResponse {
        count: documents.len(),
        documents,
    })
}

pub async fn handle_words(
    Extension(corpus): Extension<SharedCorpus>,
) -> Json<WordsResponse> {
    let words = corpus.read().await.all_words();

    Json(WordsResponse {
        count: words.len(),
        words,
    })
}
