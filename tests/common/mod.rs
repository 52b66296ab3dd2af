#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use emojos::error::FetchError;
use emojos::fetcher::{EmojiSource, MastodonEmojiFetcher, Scheme};
use emojos::models::EmojiRecord;
use emojos::server::{self, AppState, StaticArtifactLocator};
use http::{Request, Response};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Three records: one hidden, two visible, in two categories.
pub const FIXTURE: &str = r#"[
    {"shortcode":"secret","category":"staff","url":"https://cdn.example/secret.gif","static_url":"https://cdn.example/secret.png","visible_in_picker":false},
    {"shortcode":"zzz","category":"sleep","url":"https://cdn.example/zzz.gif","static_url":"https://cdn.example/zzz.png","visible_in_picker":true},
    {"shortcode":"blobcat","category":"blobs","url":"https://cdn.example/blobcat.gif","static_url":"https://cdn.example/blobcat.png"}
]"#;

pub fn fixture_records() -> Vec<EmojiRecord> {
    serde_json::from_str(FIXTURE).expect("fixture parses")
}

pub enum StubReply {
    Records(Vec<EmojiRecord>),
    Forbidden,
    Status(u16),
}

/// In-memory `EmojiSource` that remembers which domains it was asked for.
pub struct StubSource {
    reply: StubReply,
    pub requested: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requested: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl EmojiSource for StubSource {
    async fn fetch(&self, domain: &str) -> Result<Vec<EmojiRecord>, FetchError> {
        self.requested.lock().unwrap().push(domain.to_string());
        match &self.reply {
            StubReply::Records(records) => Ok(records.clone()),
            StubReply::Forbidden => Err(FetchError::Forbidden {
                domain: domain.to_string(),
            }),
            StubReply::Status(status) => Err(FetchError::UnexpectedStatus {
                domain: domain.to_string(),
                status: *status,
            }),
        }
    }
}

pub fn app_with(source: Arc<dyn EmojiSource>, code_url: Option<&str>) -> Router {
    server::router(AppState::new(
        source,
        Arc::new(StaticArtifactLocator::new(code_url.map(str::to_string))),
    ))
}

pub fn stub_app(reply: StubReply) -> Router {
    app_with(StubSource::new(reply), None)
}

/// Fetcher speaking plain HTTP so it can reach a local mock server
pub fn local_fetcher(timeout: Duration) -> MastodonEmojiFetcher {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("client builds");
    MastodonEmojiFetcher::with_scheme(client, Scheme::Http)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: Router, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// A POST to `/` with no content type at all
pub async fn post_bare(app: Router) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect has a location")
        .to_str()
        .unwrap()
}
