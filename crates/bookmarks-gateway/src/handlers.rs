mod bookmark;
mod health;

pub use bookmark::add_bookmark_handler;
pub use health::health_handler;
