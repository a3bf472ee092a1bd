use crate::error::Result;
use crate::id::BookmarkId;
use crate::record::BookmarkRecord;
use async_trait::async_trait;

/// Opens scoped sessions against the bookmark collection.
///
/// Each logical operation (one save, one import run) opens its own
/// session and closes it before completing. Sessions are never shared
/// between concurrent operations.
#[async_trait]
pub trait StoreGateway: Send + Sync + 'static {
    type Session: BookmarkCollection;

    /// Connects to the store and resolves the configured collection.
    async fn open(&self) -> Result<Self::Session>;
}

/// A session bound to the bookmark collection.
#[async_trait]
pub trait BookmarkCollection: Send + Sync {
    /// Inserts a new record. Returns `Err(Conflict)` if the id already exists.
    async fn insert(&self, record: &BookmarkRecord) -> Result<()>;

    /// Sets the description of an existing record, leaving every other
    /// field untouched. Returns `Err(NotFound)` if no record matched.
    async fn set_description(&self, id: &BookmarkId, description: &str) -> Result<()>;

    /// Releases the underlying connection.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
