mod artifact;
mod handlers;

pub use artifact::{ArtifactLocator, StaticArtifactLocator};

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::fetcher::EmojiSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn EmojiSource>,
    pub locator: Arc<dyn ArtifactLocator>,
}

impl AppState {
    pub fn new(source: Arc<dyn EmojiSource>, locator: Arc<dyn ArtifactLocator>) -> Self {
        Self { source, locator }
    }
}

/// The full route table. Static paths win over the `/{domain}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::instance_form))
        .route("/favicon.ico", get(handlers::no_content))
        .route("/robots.txt", get(handlers::no_content))
        .route("/code", get(handlers::code))
        .route("/static/site.css", get(handlers::css))
        .route("/static/copy.js", get(handlers::copy_js))
        .route("/{domain}", get(handlers::emojo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
