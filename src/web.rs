//! HTTP surface: the headline API and the static viewer.

use anyhow::Result;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analysis::Analyzer;
use crate::ranking::rank;
use crate::sources::{fetch_all, Article, NewsSource};

/// Everything a request needs: the shared HTTP client, the source
/// registry, the analysis stage, and the result limit. Read-only; each
/// request runs its own fetch-and-rank pass with no cross-request state.
pub struct AppState {
    pub client: reqwest::Client,
    pub sources: Vec<Box<dyn NewsSource>>,
    pub analyzer: Box<dyn Analyzer>,
    pub limit: usize,
}

/// Serve the API until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let app = router(Arc::new(state));

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the router. CORS is wide open for local frontend development.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/news", get(news))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /api/news`: fetch all sources, rank, analyze, respond.
async fn news(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let records = fetch_all(&state.client, &state.sources).await;
    let ranked = rank(records, state.limit);
    Json(state.analyzer.analyze(ranked).await)
}

/// `GET /`: the auto-refreshing viewer.
async fn index() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}
