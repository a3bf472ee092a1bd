use async_trait::async_trait;
use bookmarks_core::error::{Result, StoreError};
use bookmarks_core::{BookmarkCollection, BookmarkId, BookmarkRecord, StoreGateway};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    open_sessions: AtomicUsize,
    writes: AtomicUsize,
}

/// In-memory bookmark store backed by DashMap.
///
/// Clones share the same records. Inserts use the map's entry API so two
/// concurrent inserts of one id resolve to exactly one winner, matching
/// the unique `_id` guarantee of a document store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<DashMap<BookmarkId, BookmarkRecord>>,
    counters: Arc<Counters>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the record stored under `id`.
    pub fn get(&self, id: &BookmarkId) -> Option<BookmarkRecord> {
        self.storage.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of sessions opened and not yet closed.
    pub fn open_sessions(&self) -> usize {
        self.counters.open_sessions.load(Ordering::SeqCst)
    }

    /// Number of successful writes (inserts and updates) so far.
    pub fn writes(&self) -> usize {
        self.counters.writes.load(Ordering::SeqCst)
    }
}

/// A session over an [`InMemoryStore`].
#[derive(Debug)]
pub struct InMemorySession {
    storage: Arc<DashMap<BookmarkId, BookmarkRecord>>,
    counters: Arc<Counters>,
}

#[async_trait]
impl StoreGateway for InMemoryStore {
    type Session = InMemorySession;

    async fn open(&self) -> Result<InMemorySession> {
        self.counters.open_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(InMemorySession {
            storage: Arc::clone(&self.storage),
            counters: Arc::clone(&self.counters),
        })
    }
}

#[async_trait]
impl BookmarkCollection for InMemorySession {
    async fn insert(&self, record: &BookmarkRecord) -> Result<()> {
        match self.storage.entry(record.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(record.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                self.counters.writes.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }
    }

    async fn set_description(&self, id: &BookmarkId, description: &str) -> Result<()> {
        let Some(mut entry) = self.storage.get_mut(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        entry.description = description.to_owned();
        self.counters.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn close(self) -> Result<()> {
        self.counters.open_sessions.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, description: &str) -> BookmarkRecord {
        BookmarkRecord::with_time(url, description, "2024-01-01T00:00:00Z")
    }

    #[tokio::test]
    async fn insert_and_get() {
        let store = InMemoryStore::new();
        let session = store.open().await.unwrap();

        session
            .insert(&record("https://example.com", "docs"))
            .await
            .unwrap();
        session.close().await.unwrap();

        let got = store.get(&BookmarkId::derive("https://example.com")).unwrap();
        assert_eq!(got.url, "https://example.com");
        assert_eq!(got.description, "docs");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();
        assert!(store.get(&BookmarkId::derive("https://nope")).is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn insert_conflict_keeps_original() {
        let store = InMemoryStore::new();
        let session = store.open().await.unwrap();

        session.insert(&record("https://x", "first")).await.unwrap();
        let err = session
            .insert(&record("https://x", "second"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        let got = store.get(&BookmarkId::derive("https://x")).unwrap();
        assert_eq!(got.description, "first");
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn set_description_only_touches_description() {
        let store = InMemoryStore::new();
        let session = store.open().await.unwrap();
        let original = record("https://x", "old");

        session.insert(&original).await.unwrap();
        session
            .set_description(&original.id, "new")
            .await
            .unwrap();

        let got = store.get(&original.id).unwrap();
        assert_eq!(got.description, "new");
        assert_eq!(got.url, original.url);
        assert_eq!(got.time, original.time);
    }

    #[tokio::test]
    async fn set_description_missing_record() {
        let store = InMemoryStore::new();
        let session = store.open().await.unwrap();

        let err = session
            .set_description(&BookmarkId::derive("https://nope"), "x")
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn sessions_are_counted() {
        let store = InMemoryStore::new();
        let first = store.open().await.unwrap();
        let second = store.open().await.unwrap();
        assert_eq!(store.open_sessions(), 2);

        first.close().await.unwrap();
        second.close().await.unwrap();
        assert_eq!(store.open_sessions(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_of_same_id_have_one_winner() {
        let store = InMemoryStore::new();
        let mut handles = vec![];

        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let session = store.open().await.unwrap();
                let result = session
                    .insert(&record("https://race", &format!("writer-{i}")))
                    .await;
                session.close().await.unwrap();
                result.is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.open_sessions(), 0);
    }
}
