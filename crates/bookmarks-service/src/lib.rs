//! Bookmark write paths.
//!
//! [`BookmarkService`] is the single-record upsert engine behind the HTTP
//! API. [`Importer`] loads a batch of records from a JSON file with
//! best-effort inserts.

pub mod error;
pub mod import;
pub mod service;
mod session;
#[cfg(test)]
mod testing;

pub use error::ImportError;
pub use import::{ImportEntry, ImportSummary, Importer};
pub use service::BookmarkService;
