use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::EmojiRecord;

mod mastodon;

pub use mastodon::{endpoint_url, MastodonEmojiFetcher, Scheme};

/// Something that can list the custom emoji of an instance.
#[async_trait]
pub trait EmojiSource: Send + Sync {
    async fn fetch(&self, domain: &str) -> Result<Vec<EmojiRecord>, FetchError>;
}
