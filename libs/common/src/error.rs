//! Custom error types for the common library
//!
//! This module defines the error types shared by both addons. Per-record
//! problems (a malformed file record, an unclassifiable MIME code) are not
//! represented here; those are logged and skipped where they occur.

use thiserror::Error;

/// Errors from a single fetch against the bNyan server
///
/// Non-200 statuses are not errors: the fetcher reports those as an empty
/// result. Only transport failures and undecodable bodies surface here, and
/// both abort the listing in progress.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure or timeout
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 200 response whose body is not the expected JSON
    #[error("cannot decode the response from '{url}' as json: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Type alias for Result with FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while loading the server configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file cannot be read
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON
    #[error("config file '{path}' is not valid json: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required setting is absent from the file or the environment
    #[error("{0} is required")]
    Missing(&'static str),

    /// The port setting is present but not a port number
    #[error("'{0}' is not a valid port")]
    InvalidPort(String),
}
