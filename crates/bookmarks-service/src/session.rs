use bookmarks_core::error::Result;
use bookmarks_core::BookmarkCollection;
use tracing::warn;

/// Closes `session` and merges the close outcome into the operation outcome.
///
/// The operation error wins over a close error; a close error is only
/// returned when the operation itself succeeded.
pub(crate) async fn close_after<S, T>(session: S, outcome: Result<T>) -> Result<T>
where
    S: BookmarkCollection,
{
    let closed = session.close().await;

    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!(error = %close_err, "failed to close store session after error");
            Err(err)
        }
    }
}
