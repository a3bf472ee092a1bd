use crate::session::close_after;
use async_trait::async_trait;
use bookmarks_core::error::{Result, StoreError};
use bookmarks_core::{BookmarkCollection, BookmarkRecord, BookmarkSaver, StoreGateway};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The single-record upsert engine.
///
/// A save derives the record id from the URL and tries a plain insert.
/// When the insert fails, for whatever reason, the service falls back to
/// updating the description of the record with that id. Exactly one
/// session is opened per save and it is closed on every path.
///
/// Note: no lock coordinates concurrent saves of the same URL. Both may
/// attempt the insert; the loser falls back to the update and the store's
/// per-document atomicity decides the final description.
#[derive(Debug)]
pub struct BookmarkService<G> {
    gateway: Arc<G>,
}

impl<G> Clone for BookmarkService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: StoreGateway> BookmarkService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    async fn upsert(session: &G::Session, record: &BookmarkRecord) -> Result<()> {
        let inserted = session.insert(record).await;
        let Err(insert_err) = inserted else {
            debug!(id = %record.id, url = %record.url, "inserted bookmark");
            return Ok(());
        };

        match &insert_err {
            StoreError::Conflict(_) => {
                debug!(id = %record.id, "bookmark exists, updating description")
            }
            other => {
                warn!(id = %record.id, error = %other, "insert failed, falling back to update")
            }
        }

        session
            .set_description(&record.id, &record.description)
            .await?;
        debug!(id = %record.id, "updated bookmark description");
        Ok(())
    }
}

#[async_trait]
impl<G: StoreGateway> BookmarkSaver for BookmarkService<G> {
    async fn save(&self, url: &str, description: &str) -> Result<()> {
        if url.is_empty() {
            trace!("ignoring save without url");
            return Ok(());
        }

        let record = BookmarkRecord::new(url, description);
        let session = self.gateway.open().await?;
        let outcome = Self::upsert(&session, &record).await;
        close_after(session, outcome).await
    }
}
