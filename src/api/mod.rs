use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;
use crate::domain::NewsItem;
use crate::services::NewsCache;
use crate::sources::{SourceHealth, SourceRegistry, SourceStatus};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<NewsCache>,
    pub registry: Arc<SourceRegistry>,
    pub health: Arc<SourceHealth>,
}

impl From<&App> for AppState {
    fn from(app: &App) -> Self {
        Self {
            cache: Arc::clone(&app.cache),
            registry: Arc::clone(&app.registry),
            health: Arc::clone(&app.health),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(|| async { "ok" }))
        .route("/api/news", get(get_news))
        .route("/api/sources", get(list_sources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_page() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// Always 200; failed sources just contribute nothing.
async fn get_news(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    let items = state.cache.get_news().await;
    Json(items.as_ref().clone())
}

#[derive(Serialize)]
struct SourceView {
    name: String,
    url: String,
    category: String,
    language: String,
    health: SourceStatus,
}

async fn list_sources(State(state): State<AppState>) -> Json<Vec<SourceView>> {
    let sources = state
        .registry
        .sources()
        .iter()
        .map(|s| SourceView {
            name: s.name.clone(),
            url: s.url.clone(),
            category: s.category.clone(),
            language: s.language.clone(),
            health: state.health.status(&s.url),
        })
        .collect();

    Json(sources)
}
