//! Core types and traits for the bookmark service.
//!
//! This crate provides the content-addressed identifier, the stored
//! record model and the store traits shared by the storage backends,
//! the upsert engine and the batch importer.

pub mod error;
pub mod id;
pub mod record;
pub mod saver;
pub mod store;

pub use error::{Result, StoreError};
pub use id::BookmarkId;
pub use record::BookmarkRecord;
pub use saver::BookmarkSaver;
pub use store::{BookmarkCollection, StoreGateway};
