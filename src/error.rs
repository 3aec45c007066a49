//! Error types for the MySportsFeeds SDK.

use thiserror::Error;

/// Result type for MySportsFeeds operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the MySportsFeeds SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested API version is not supported.
    #[error("unrecognized version '{version}'. Supported versions are: '1.0', '1.1', '1.2'")]
    UnsupportedVersion {
        /// The version string that was requested.
        version: String,
    },

    /// The store configuration is invalid.
    #[error("invalid store configuration: {0}")]
    InvalidStoreConfig(String),

    /// The selected API version does not accept BASIC credentials.
    #[error("BASIC authentication not supported for version {version}")]
    AuthNotSupported {
        /// The active API version.
        version: String,
    },

    /// No credentials have been supplied yet.
    #[error("you must authenticate() before making requests")]
    AuthRequired,

    /// The feed name is not in the catalog for the selected API version.
    #[error("unknown feed '{feed}'")]
    InvalidFeed {
        /// The feed name that was requested.
        feed: String,
    },

    /// The output format is not one of json, xml or csv.
    #[error("unsupported format '{format}'")]
    InvalidFormat {
        /// The format string that was requested.
        format: String,
    },

    /// A season-scoped feed was requested without a season.
    #[error("feed '{feed}' requires a season")]
    MissingSeason {
        /// The feed name that was requested.
        feed: String,
    },

    /// The server signalled not-modified but no stored payload exists.
    #[error("no stored payload for '{filename}'")]
    NotFound {
        /// The derived storage filename that was missing.
        filename: String,
    },

    /// The API returned an unexpected HTTP status.
    #[error("API call failed with status {status} for {url}")]
    Http {
        /// HTTP status code
        status: u16,
        /// The request URL
        url: String,
    },

    /// Malformed JSON in a feed body.
    #[error("failed to decode feed body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or transport error.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Local store I/O error.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request timed out.
    #[error("request timed out")]
    Timeout,
}
