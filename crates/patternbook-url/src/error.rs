//! URL builder error types.

use thiserror::Error;

/// Invalid arguments passed to [`UrlBuilder`](crate::UrlBuilder).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Base URL was absent, empty, or blank.
    #[error("Base URL cannot be null or empty")]
    EmptyBaseUrl,

    /// Path segment was empty or blank.
    #[error("Path segment cannot be null or empty")]
    EmptyPathSegment,

    /// Query parameter key was empty or blank.
    #[error("Query parameter key cannot be null or empty")]
    EmptyQueryKey,
}

/// Result alias for URL builder operations.
pub type Result<T> = std::result::Result<T, UrlError>;
