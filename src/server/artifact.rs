use anyhow::Result;
use async_trait::async_trait;

/// Tells `/code` where the running deployment's source package lives. The
/// hosting environment supplies the implementation.
#[async_trait]
pub trait ArtifactLocator: Send + Sync {
    async fn locate(&self) -> Result<Option<String>>;
}

/// Locator backed by a fixed, configured location.
pub struct StaticArtifactLocator {
    location: Option<String>,
}

impl StaticArtifactLocator {
    pub fn new(location: Option<String>) -> Self {
        Self { location }
    }
}

#[async_trait]
impl ArtifactLocator for StaticArtifactLocator {
    async fn locate(&self) -> Result<Option<String>> {
        Ok(self.location.clone())
    }
}
