use super::ProjectVersion;
use crate::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;

/// The two provider capabilities the fetcher needs. Kept minimal so the
/// fetch logic can be exercised against a scripted fake without a network.
#[async_trait]
pub trait ModProvider: Send + Sync {
    /// Lists a project's versions in the order the provider returns them.
    async fn list_versions(&self, project_id: &str) -> Result<Vec<ProjectVersion>, FetchError>;

    /// Fetches the raw bytes of one artifact by its direct download URL.
    async fn fetch_file(&self, url: &str) -> Result<Bytes, FetchError>;
}
