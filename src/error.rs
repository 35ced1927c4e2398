//! Error types for the post search server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Error, Debug)]
pub enum StoreApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Store returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by a similarity engine for a single document field.
///
/// These never fail a whole search: the fuzzy tier logs them and skips the
/// document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// The engine reported a match index outside the haystack
    #[error("Match index {index} out of bounds for field of length {len}")]
    MalformedIndices { index: usize, len: usize },

    /// Generic matching error
    #[error("Matching error: {0}")]
    Other(String),
}

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query missing, empty or whitespace only
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// The document corpus could not be fetched
    #[error("Document corpus unavailable: {0}")]
    CorpusUnavailable(#[from] StoreApiError),
}

/// Convenience type alias for Results with StoreApiError
pub type StoreApiResult<T> = Result<T, StoreApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreApiError::NotFound("post".to_string());
        assert_eq!(err.to_string(), "Resource not found: post");

        let err = ConfigError::MissingVar("STORE_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: STORE_API_KEY"
        );

        let err = SearchError::InvalidQuery("query cannot be empty".to_string());
        assert_eq!(err.to_string(), "Invalid search query: query cannot be empty");

        let err = MatchingError::MalformedIndices { index: 9, len: 4 };
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_api_error_variants() {
        let err = StoreApiError::ApiError {
            status: 503,
            message: "Unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Unavailable"));
    }

    #[test]
    fn test_corpus_unavailable_from_store_error() {
        let err: SearchError = StoreApiError::Unauthorized.into();
        assert!(matches!(err, SearchError::CorpusUnavailable(_)));
        assert!(err.to_string().contains("Authentication failed"));
    }
}
