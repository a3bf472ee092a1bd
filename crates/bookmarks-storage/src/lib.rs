//! Store gateway backends for bookmark records.
//!
//! [`MongoStore`] talks to MongoDB-compatible document stores (including
//! Azure Cosmos DB for MongoDB). [`InMemoryStore`] keeps records in a
//! concurrent map and is used for tests and local runs.

pub mod config;
pub mod memory;
pub mod mongo;

pub use bookmarks_core::{BookmarkCollection, StoreError, StoreGateway};
pub use config::MongoConfig;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
