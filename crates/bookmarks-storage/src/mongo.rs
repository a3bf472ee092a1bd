use crate::config::MongoConfig;
use async_trait::async_trait;
use bookmarks_core::error::{Result, StoreError};
use bookmarks_core::{BookmarkCollection, BookmarkId, BookmarkRecord, StoreGateway};
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, warn};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB implementation of the store gateway.
///
/// Every [`open`](StoreGateway::open) creates a fresh client, pings the
/// server and resolves the configured collection; [`close`](BookmarkCollection::close)
/// shuts that client down. Retryable writes are disabled and the
/// connection is direct, which Azure Cosmos DB for MongoDB requires.
#[derive(Debug, Clone)]
pub struct MongoStore {
    config: MongoConfig,
}

impl MongoStore {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }

    async fn client_options(&self) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(&self.config.connection_string)
            .await
            .map_err(map_mongo_error)?;
        options.retry_writes = Some(false);
        options.direct_connection = Some(true);
        options.connect_timeout = Some(self.config.connect_timeout);
        options.server_selection_timeout = Some(self.config.connect_timeout);
        Ok(options)
    }
}

/// A connected client bound to the bookmark collection.
#[derive(Debug)]
pub struct MongoSession {
    client: Client,
    collection: Collection<BookmarkRecord>,
}

fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_mongo_error(err: MongoError) -> StoreError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
            StoreError::Timeout(message)
        }
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => StoreError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StoreError::InvalidData(message)
        }
        ErrorKind::Write(_) => StoreError::Write(message),
        _ => StoreError::Operation(message),
    }
}

#[async_trait]
impl StoreGateway for MongoStore {
    type Session = MongoSession;

    async fn open(&self) -> Result<MongoSession> {
        let client = Client::with_options(self.client_options().await?).map_err(map_mongo_error)?;

        if let Err(err) = client.database("admin").run_command(doc! { "ping": 1 }).await {
            client.shutdown().await;
            return Err(map_mongo_error(err));
        }

        let collection = client
            .database(&self.config.database)
            .collection::<BookmarkRecord>(&self.config.collection);
        debug!(
            database = %self.config.database,
            collection = %self.config.collection,
            "opened store session"
        );

        Ok(MongoSession { client, collection })
    }
}

#[async_trait]
impl BookmarkCollection for MongoSession {
    async fn insert(&self, record: &BookmarkRecord) -> Result<()> {
        match self.collection.insert_one(record).await {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => Err(StoreError::Conflict(record.id.to_string())),
            Err(err) => Err(map_mongo_error(err)),
        }
    }

    async fn set_description(&self, id: &BookmarkId, description: &str) -> Result<()> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": { "$eq": id.as_str() } },
                doc! { "$set": { "description": description } },
            )
            .await
            .map_err(map_mongo_error)?;

        if result.matched_count == 0 {
            warn!(id = %id, "description update matched no bookmark");
            return Err(StoreError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn close(self) -> Result<()> {
        self.client.shutdown().await;
        debug!("closed store session");
        Ok(())
    }
}
