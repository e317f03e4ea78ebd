//! Loader for the public, read-only list pages.
//!
//! A page is in exactly one of three phases; it only leaves `Failed` or
//! `Ready` through an explicit retry or a remount.

use crate::backend::Backend;
use crate::error::Error;
use crate::resource::Resource;

/// Render phase of a public list page.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// User-facing message; a retry action re-runs the fetch.
    Failed(String),
    /// The fetched collection. An empty vec renders the coming-soon
    /// placeholder, never an empty grid.
    Ready(Vec<T>),
}

/// Fetch and decode a collection.
pub async fn fetch_collection<R: Resource, B: Backend>(
    backend: &B,
    token: Option<&str>,
) -> Result<Vec<R>, Error> {
    let body = backend.get(&R::collection_path(), token).await?;
    serde_json::from_str(&body).map_err(|err| Error::Decode(err.to_string()))
}

/// Unauthenticated fetch for the public pages, folded into a render phase.
pub async fn load_public<R: Resource, B: Backend>(backend: &B) -> LoadState<R> {
    match fetch_collection::<R, B>(backend, None).await {
        Ok(items) => LoadState::Ready(items),
        Err(err) => {
            tracing::error!(resource = R::ENDPOINT, %err, "public list fetch failed");
            LoadState::Failed(format!(
                "Failed to load {}. Please try again later.",
                R::ENDPOINT
            ))
        }
    }
}
