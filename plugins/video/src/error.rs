//! Custom error types for the video addon

use thiserror::Error;

use common::error::FetchError;

use crate::router::RouteError;

/// Fatal failures for one plugin invocation
///
/// Per-record problems never surface here; they are logged and skipped
/// inside the listing pipeline.
#[derive(Error, Debug)]
pub enum AddonError {
    /// The query string does not name a supported action
    #[error(transparent)]
    Route(#[from] RouteError),

    /// A listing-level fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The category listing came back empty or unreachable
    #[error("could not fetch categories from {0}")]
    NoCategories(String),

    /// The file listing response carried no content
    #[error("response from {0} did not return any content")]
    EmptyListing(String),
}
