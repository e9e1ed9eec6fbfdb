use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Json, Router, routing::delete, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    node_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let node_url =
        std::env::var("NODE_URL").unwrap_or_else(|_| "http://localhost:7700".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        node_url: node_url.trim_end_matches('/').to_string(),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/search", get(api_search))
        .route("/api/documents", post(api_add_document))
        .route("/api/documents/:name", delete(api_remove_document))
        .route("/api/stats", get(api_stats))
        .route("/api/words", get(api_words))
        .with_state(state);

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let limit = params.limit.unwrap_or(10);
    let url = format!(
        "{}/search?q={}&limit={}",
        state.node_url,
        urlencoding::encode(&params.q),
        limit
    );

    forward_get(&state, url).await
}

async fn api_add_document(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!("{}/documents", state.node_url);
    let resp = state
        .client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    proxy_response(resp).await
}

async fn api_remove_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!(
        "{}/documents/{}",
        state.node_url,
        urlencoding::encode(&name)
    );
    let resp = state
        .client
        .delete(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    proxy_response(resp).await
}

async fn api_stats(
    State(state): State<AppState>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward_get(&state, format!("{}/stats", state.node_url)).await
}

async fn api_words(
    State(state): State<AppState>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    forward_get(&state, format!("{}/words", state.node_url)).await
}

async fn forward_get(
    state: &AppState,
    url: String,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let resp = state
        .client
        .get(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    proxy_response(resp).await
}

async fn proxy_response(
    resp: reqwest::Response,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}
