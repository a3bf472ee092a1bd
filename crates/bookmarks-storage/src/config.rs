use std::time::Duration;
use typed_builder::TypedBuilder;

pub const DEFAULT_DATABASE: &str = "bookmarks";
pub const DEFAULT_COLLECTION: &str = "urls";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Location of the bookmark collection in a MongoDB-compatible store.
///
/// Built once at process start and handed to [`MongoStore::new`][crate::MongoStore::new].
#[derive(Clone, TypedBuilder)]
pub struct MongoConfig {
    #[builder(setter(into))]
    pub connection_string: String,
    #[builder(default = DEFAULT_DATABASE.to_string(), setter(into))]
    pub database: String,
    #[builder(default = DEFAULT_COLLECTION.to_string(), setter(into))]
    pub collection: String,
    /// Bounds connection establishment and server selection.
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
}

// the connection string usually embeds credentials
impl std::fmt::Debug for MongoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoConfig")
            .field("connection_string", &"<redacted>")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
