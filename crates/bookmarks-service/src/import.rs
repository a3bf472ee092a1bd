use crate::error::ImportError;
use crate::session::close_after;
use bookmarks_core::error::Result;
use bookmarks_core::{BookmarkCollection, BookmarkRecord, StoreGateway};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One bookmark as it appears in an import file.
///
/// Any `id` in the file is ignored; the identifier is always derived from
/// `url` again. A missing or `null` url reads as the empty string.
/// Go-style capitalized keys are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImportEntry {
    #[serde(default, alias = "URL")]
    pub url: Option<String>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(default, alias = "Time")]
    pub time: Option<String>,
}

impl ImportEntry {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            description: Some(description.into()),
            time: None,
        }
    }

    fn into_record(self) -> BookmarkRecord {
        BookmarkRecord::with_time(
            self.url.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.time.unwrap_or_default(),
        )
    }
}

/// Outcome counts of one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub attempted: usize,
    pub inserted: usize,
    pub failed: usize,
}

/// Parses the contents of an import file: a JSON array of bookmarks.
pub fn parse_entries(bytes: &[u8]) -> serde_json::Result<Vec<ImportEntry>> {
    serde_json::from_slice(bytes)
}

/// Best-effort batch importer.
///
/// Every entry is inserted independently inside one store session. A
/// rejected insert (including an already stored URL) is logged and
/// counted, and the run carries on; records are never updated. Only
/// failing to open or close the session fails the run.
#[derive(Debug)]
pub struct Importer<G> {
    gateway: Arc<G>,
}

impl<G: StoreGateway> Importer<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }

    /// Reads `path` and imports its entries.
    pub async fn import_file(
        &self,
        path: impl AsRef<Path>,
    ) -> std::result::Result<ImportSummary, ImportError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = parse_entries(&bytes).map_err(|source| ImportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), entries = entries.len(), "importing bookmarks");
        Ok(self.import_all(entries).await?)
    }

    /// Inserts every entry in order, continuing past per-record failures.
    pub async fn import_all(&self, entries: Vec<ImportEntry>) -> Result<ImportSummary> {
        let session = self.gateway.open().await?;
        let summary = Self::insert_each(&session, entries).await;
        let summary = close_after(session, Ok(summary)).await?;

        info!(
            attempted = summary.attempted,
            inserted = summary.inserted,
            failed = summary.failed,
            "bookmark import finished"
        );
        Ok(summary)
    }

    async fn insert_each(session: &G::Session, entries: Vec<ImportEntry>) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let record = entry.into_record();
            summary.attempted += 1;

            match session.insert(&record).await {
                Ok(()) => {
                    summary.inserted += 1;
                    debug!(index, id = %record.id, url = %record.url, "imported bookmark");
                }
                Err(err) => {
                    summary.failed += 1;
                    warn!(index, url = %record.url, error = %err, "failed to import bookmark");
                }
            }
        }

        summary
    }
}
