use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Display;

/// Content-addressed identifier of a bookmark.
///
/// The identifier is the lowercase hex SHA-256 digest of the raw URL bytes.
/// No normalization happens before hashing, so `https://a.com` and
/// `https://a.com/` are different bookmarks.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(String);

impl BookmarkId {
    /// Derives the identifier for `url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookmarks_core::BookmarkId;
    ///
    /// let id = BookmarkId::derive("https://example.com");
    /// assert_eq!(id.as_str().len(), 64);
    /// ```
    pub fn derive(url: &str) -> Self {
        Self(hex::encode(Sha256::digest(url.as_bytes())))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BookmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BookmarkId").field(&self.0).finish()
    }
}

impl Display for BookmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_matches_sha256_hex() {
        let id = BookmarkId::derive("https://example.com");
        assert_eq!(
            id.as_str(),
            "100680ad546ce6a577f42f52df33b4cfdca756859e664b8d7de329b150d09ce9"
        );
    }

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(
            BookmarkId::derive("https://x"),
            BookmarkId::derive("https://x")
        );
    }

    #[test]
    fn no_normalization_before_hashing() {
        let bare = BookmarkId::derive("https://example.com");
        let slash = BookmarkId::derive("https://example.com/");
        let upper = BookmarkId::derive("HTTPS://example.com");
        assert_ne!(bare, slash);
        assert_ne!(bare, upper);
        assert_eq!(
            slash.as_str(),
            "0f115db062b7c0dd030b16878c99dea5c354b49dc37b38eb8846179c7783e9d7"
        );
    }

    #[test]
    fn distinct_urls_give_distinct_ids() {
        let ids: std::collections::HashSet<_> = (0..500)
            .map(|i| BookmarkId::derive(&format!("https://example.com/page/{i}")))
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn lowercase_hex() {
        let id = BookmarkId::derive("https://x");
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = BookmarkId::derive("https://x");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            "\"76d6c019db51ab35edc24714da29820a688235bce30c4d50587a0545dd64fd1e\""
        );
    }
}
