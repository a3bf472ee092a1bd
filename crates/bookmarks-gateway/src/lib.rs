//! HTTP surface of the bookmark service.
//!
//! Exposes the write-only `/api/Add` action backed by any
//! [`BookmarkSaver`](bookmarks_core::BookmarkSaver), plus `/health`.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
