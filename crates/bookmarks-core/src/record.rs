use crate::id::BookmarkId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

const RFC3339_SECONDS: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A stored bookmark document.
///
/// Serializes to `{_id, url, description, time}`, one document per
/// distinct URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    #[serde(rename = "_id")]
    pub id: BookmarkId,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 time of the last insert attempt. Empty for imported
    /// records that carried no time.
    #[serde(default)]
    pub time: String,
}

impl BookmarkRecord {
    /// Builds a record for `url` stamped with the current time.
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_time(url, description, now_rfc3339())
    }

    /// Builds a record keeping a caller supplied `time`.
    ///
    /// The identifier is always recomputed from `url`.
    pub fn with_time(
        url: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let url = url.into();
        Self {
            id: BookmarkId::derive(&url),
            url,
            description: description.into(),
            time: time.into(),
        }
    }
}

/// Current UTC time as RFC 3339 with second precision.
pub fn now_rfc3339() -> String {
    Timestamp::now().strftime(RFC3339_SECONDS).to_string()
}
