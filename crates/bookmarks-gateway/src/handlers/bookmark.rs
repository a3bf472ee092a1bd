use crate::error::Result;
use crate::model::AddBookmarkParams;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

const CONTENT_TYPE: &str = "text/json; charset=utf-8";

/// Saves a bookmark from the `url` and `description` query parameters.
///
/// Answers `200` with an empty body, also when `url` is missing. A
/// repeated parameter uses its first value.
pub async fn add_bookmark_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let params = AddBookmarkParams::from_pairs(pairs);
    let url = params.url.unwrap_or_default();
    let description = params.description.unwrap_or_default();

    state.saver().save(&url, &description).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
    )
        .into_response())
}
