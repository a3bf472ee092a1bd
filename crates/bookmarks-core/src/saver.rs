use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BookmarkSaver: Send + Sync + 'static {
    /// Stores `url` with `description`, or updates the description when
    /// the URL was saved before. An empty `url` is accepted and ignored.
    async fn save(&self, url: &str, description: &str) -> Result<()>;
}
