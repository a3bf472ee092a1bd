use async_trait::async_trait;
use bookmarks_core::error::{Result, StoreError};
use bookmarks_core::{BookmarkCollection, BookmarkId, BookmarkRecord, StoreGateway};
use bookmarks_storage::memory::InMemorySession;
use bookmarks_storage::InMemoryStore;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Faults {
    unreachable: bool,
    rejected_urls: HashSet<String>,
    failing_updates: bool,
    failing_close: bool,
}

/// An [`InMemoryStore`] with injectable failures.
#[derive(Debug, Clone, Default)]
pub(crate) struct FaultyStore {
    inner: InMemoryStore,
    faults: Arc<Faults>,
}

impl FaultyStore {
    pub(crate) fn unreachable() -> Self {
        Self::with(Faults {
            unreachable: true,
            ..Faults::default()
        })
    }

    pub(crate) fn rejecting_inserts_of<const N: usize>(urls: [&str; N]) -> Self {
        Self::with(Faults {
            rejected_urls: urls.iter().map(|url| url.to_string()).collect(),
            ..Faults::default()
        })
    }

    pub(crate) fn failing_updates() -> Self {
        Self::with(Faults {
            failing_updates: true,
            ..Faults::default()
        })
    }

    pub(crate) fn failing_close() -> Self {
        Self::with(Faults {
            failing_close: true,
            ..Faults::default()
        })
    }

    pub(crate) fn failing_updates_and_close() -> Self {
        Self::with(Faults {
            failing_updates: true,
            failing_close: true,
            ..Faults::default()
        })
    }

    fn with(faults: Faults) -> Self {
        Self {
            inner: InMemoryStore::new(),
            faults: Arc::new(faults),
        }
    }

    pub(crate) fn inner(&self) -> &InMemoryStore {
        &self.inner
    }
}

pub(crate) struct FaultySession {
    inner: InMemorySession,
    faults: Arc<Faults>,
}

#[async_trait]
impl StoreGateway for FaultyStore {
    type Session = FaultySession;

    async fn open(&self) -> Result<FaultySession> {
        if self.faults.unreachable {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(FaultySession {
            inner: self.inner.open().await?,
            faults: Arc::clone(&self.faults),
        })
    }
}

#[async_trait]
impl BookmarkCollection for FaultySession {
    async fn insert(&self, record: &BookmarkRecord) -> Result<()> {
        if self.faults.rejected_urls.contains(&record.url) {
            return Err(StoreError::Write(format!("rejected {}", record.url)));
        }
        self.inner.insert(record).await
    }

    async fn set_description(&self, id: &BookmarkId, description: &str) -> Result<()> {
        if self.faults.failing_updates {
            return Err(StoreError::Write("update rejected".to_string()));
        }
        self.inner.set_description(id, description).await
    }

    async fn close(self) -> Result<()> {
        self.inner.close().await?;
        if self.faults.failing_close {
            return Err(StoreError::Unavailable("connection reset on close".to_string()));
        }
        Ok(())
    }
}
