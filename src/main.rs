use axum::{
    Router,
    extract::Extension,
    routing::{delete, get, post},
};
use docsearch::corpus::handlers::{
    handle_add_document, handle_remove_document, handle_stats, handle_words,
};
use docsearch::corpus::store::{Corpus, SharedCorpus};
use docsearch::ingestion::handlers::handle_ingest;
use docsearch::ingestion::loader::load_folder;
use docsearch::search::handlers::handle_search;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} --bind <addr:port> [--docs <folder>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:7700", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:7700 --docs ./documents",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut docs_folder = PathBuf::from("documents");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--docs" => {
                docs_folder = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    tracing::info!("Starting search service on {}", bind_addr);

    // 1. Corpus, populated from the documents folder:
    let mut corpus = Corpus::new();
    let loaded = load_folder(&mut corpus, &docs_folder);
    tracing::info!(
        "Corpus ready: {} documents from {}",
        loaded,
        docs_folder.display()
    );

    let corpus: SharedCorpus = Arc::new(RwLock::new(corpus));

    // 2. HTTP Router:
    let app = Router::new()
        .route("/documents", post(handle_add_document))
        .route("/documents/:name", delete(handle_remove_document))
        .route("/search", get(handle_search))
        .route("/stats", get(handle_stats))
        .route("/words", get(handle_words))
        .route("/ingest", post(handle_ingest))
        .layer(Extension(corpus));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
