use crate::telemetry::LogFormat;
use bookmarks_storage::config::{DEFAULT_COLLECTION, DEFAULT_DATABASE};
use bookmarks_storage::MongoConfig;
use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const LISTEN_ADDR_ENV: &str = "BOOKMARKS_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "BOOKMARKS_STORAGE_BACKEND";
pub const CONNECTION_STRING_ENV: &str = "AZURE_COSMOSDB_CONNECTION_STRING";
pub const DATABASE_ENV: &str = "URL_DATABASE";
pub const COLLECTION_ENV: &str = "URL_COLLECTION";
pub const CONNECT_TIMEOUT_ENV: &str = "BOOKMARKS_CONNECT_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "BOOKMARKS_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:80";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: &str = "5";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set when the storage backend is mongo")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mongo")]
    Mongo,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mongo => write!(f, "mongo"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bookmarks", about = "Saves bookmarks into a document store")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Mongo
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = CONNECTION_STRING_ENV, hide_env_values = true)]
    pub connection_string: Option<String>,

    #[arg(long, env = DATABASE_ENV, default_value = DEFAULT_DATABASE)]
    pub database: String,

    #[arg(long, env = COLLECTION_ENV, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    #[arg(long, env = CONNECT_TIMEOUT_ENV, default_value = DEFAULT_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_secs: u64,

    /// Import a JSON array of bookmarks from this file and exit.
    #[arg(long, alias = "importFile")]
    pub import_file: Option<PathBuf>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Builds the store location for the mongo backend.
    pub fn mongo_config(&self) -> Result<MongoConfig, ConfigError> {
        let connection_string = self
            .connection_string
            .clone()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(CONNECTION_STRING_ENV))?;

        Ok(MongoConfig::builder()
            .connection_string(connection_string)
            .database(self.database.clone())
            .collection(self.collection.clone())
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build())
    }
}
