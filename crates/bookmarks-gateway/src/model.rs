mod bookmark;
mod health;

pub use bookmark::{AddBookmarkParams, ErrorResponse};
pub use health::HealthResponse;
