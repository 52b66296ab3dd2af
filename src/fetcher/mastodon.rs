use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;
use crate::fetcher::EmojiSource;
use crate::models::{EmojiRecord, CUSTOM_EMOJIS_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Https,
    /// Plain HTTP, only meant for local development against a test double
    Http,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }
}

/// Build the emoji list URL for `domain`, which must be a bare authority
/// (host with an optional port). Anything that would change the path, add a
/// query, a fragment or credentials is rejected.
pub fn endpoint_url(scheme: Scheme, domain: &str) -> Result<Url, FetchError> {
    let invalid = || FetchError::InvalidDomain {
        domain: domain.to_string(),
    };

    // Checked on the raw text, since URL parsing normalises dot segments away
    if domain.contains(&['/', '\\', '?', '#', '@'][..]) {
        return Err(invalid());
    }

    let url = Url::parse(&format!("{}://{}{}", scheme.as_str(), domain, CUSTOM_EMOJIS_PATH))
        .map_err(|_| invalid())?;

    if url.host_str().map_or(true, str::is_empty)
        || url.path() != CUSTOM_EMOJIS_PATH
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(invalid());
    }

    Ok(url)
}

/// Fetches `/api/v1/custom_emojis` from a Mastodon-compatible instance with a
/// single GET. No retries, no auth headers.
pub struct MastodonEmojiFetcher {
    client: Client,
    scheme: Scheme,
}

impl MastodonEmojiFetcher {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            scheme: Scheme::Https,
        }
    }

    pub fn with_scheme(client: Client, scheme: Scheme) -> Self {
        Self { client, scheme }
    }
}

#[async_trait]
impl EmojiSource for MastodonEmojiFetcher {
    async fn fetch(&self, domain: &str) -> Result<Vec<EmojiRecord>, FetchError> {
        let url = endpoint_url(self.scheme, domain)?;
        info!("Fetching custom emoji from {}", url);

        let network = |source: reqwest::Error| {
            warn!("Request to {} failed: {}", domain, source);
            FetchError::Network {
                domain: domain.to_string(),
                source,
            }
        };

        let response = self.client.get(url).send().await.map_err(network)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("{} refused to list its emoji (HTTP {})", domain, status);
            return Err(FetchError::Forbidden {
                domain: domain.to_string(),
            });
        }
        if !status.is_success() {
            warn!("HTTP error {} from {}", status, domain);
            return Err(FetchError::UnexpectedStatus {
                domain: domain.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        let records: Vec<EmojiRecord> =
            serde_json::from_slice(&body).map_err(|source| {
                warn!("Malformed emoji list from {}: {}", domain, source);
                FetchError::MalformedResponse {
                    domain: domain.to_string(),
                    source,
                }
            })?;

        info!("Received {} custom emoji from {}", records.len(), domain);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_fixed_https_endpoint() {
        let url = endpoint_url(Scheme::Https, "example.social").unwrap();
        assert_eq!(url.as_str(), "https://example.social/api/v1/custom_emojis");
    }

    #[test]
    fn keeps_explicit_port() {
        let url = endpoint_url(Scheme::Http, "127.0.0.1:8080").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v1/custom_emojis");
    }

    #[test]
    fn rejects_anything_but_an_authority() {
        for domain in [
            "",
            "example.social/admin",
            "example.social/..",
            "example.social\\..",
            "example.social?x=1",
            "example.social#frag",
            "user@example.social",
            "exa mple.social",
        ] {
            let result = endpoint_url(Scheme::Https, domain);
            assert!(
                matches!(result, Err(FetchError::InvalidDomain { .. })),
                "expected {:?} to be rejected",
                domain
            );
        }
    }
}
