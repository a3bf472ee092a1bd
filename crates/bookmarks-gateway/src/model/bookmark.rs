use serde::Serialize;

/// Query parameters of `/api/Add`. A missing `url` means "nothing to save".
///
/// Repeated keys keep their first value.
#[derive(Debug, Default)]
pub struct AddBookmarkParams {
    pub url: Option<String>,
    pub description: Option<String>,
}

impl AddBookmarkParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "url" => &mut params.url,
                "description" => &mut params.description,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
