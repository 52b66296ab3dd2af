use thiserror::Error;

/// Why an instance's emoji list could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{domain} is not a valid instance domain")]
    InvalidDomain { domain: String },

    #[error("could not reach {domain}: {source}")]
    Network {
        domain: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{domain} does not allow anonymous access to its emoji list")]
    Forbidden { domain: String },

    #[error("{domain} answered with HTTP {status}")]
    UnexpectedStatus { domain: String, status: u16 },

    #[error("{domain} sent an emoji list we could not read: {source}")]
    MalformedResponse {
        domain: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn domain(&self) -> &str {
        match self {
            FetchError::InvalidDomain { domain }
            | FetchError::Network { domain, .. }
            | FetchError::Forbidden { domain }
            | FetchError::UnexpectedStatus { domain, .. }
            | FetchError::MalformedResponse { domain, .. } => domain,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, FetchError::Forbidden { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }

    /// One-line explanation for the "oh no" page
    pub fn reason(&self) -> String {
        match self {
            FetchError::InvalidDomain { .. } => {
                "That doesn't look like a domain name.".to_string()
            }
            FetchError::Network { source, .. } if source.is_timeout() => {
                "The instance took too long to answer.".to_string()
            }
            FetchError::Network { .. } => "We couldn't connect to the instance.".to_string(),
            FetchError::Forbidden { .. } => "This instance's emoji list is private.".to_string(),
            FetchError::UnexpectedStatus { status: 404, .. } => {
                "This instance doesn't support the Mastodon custom emoji API.".to_string()
            }
            FetchError::UnexpectedStatus { status, .. } => {
                format!("The instance answered with HTTP {}. That's all we know.", status)
            }
            FetchError::MalformedResponse { .. } => {
                "The instance sent something that isn't an emoji list.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_distinguish_not_found() {
        let not_found = FetchError::UnexpectedStatus {
            domain: "example.social".to_string(),
            status: 404,
        };
        let teapot = FetchError::UnexpectedStatus {
            domain: "example.social".to_string(),
            status: 418,
        };

        assert!(not_found.reason().contains("doesn't support"));
        assert!(teapot.reason().contains("418"));
        assert_eq!(teapot.domain(), "example.social");
        assert!(!teapot.is_forbidden());
    }
}
