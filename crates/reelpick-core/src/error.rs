//! Error types for the Reelpick core library.
//!
//! This module defines all error types used throughout the library.
//! TmdbError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for catalog and recommendation operations
#[derive(Error, Debug)]
pub enum TmdbError {
    /// HTTP transport failed or the response body could not be decoded
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// TMDB answered with an unexpected status code
    #[error("TMDB returned status {status} for {endpoint}")]
    Api {
        /// Request path that produced the status
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// Requested resource does not exist upstream (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Search query was empty or whitespace-only
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// TMDB_API_KEY is missing from the environment
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,

    /// Recommendation exhausted all candidate pools, including the
    /// popular-movies fallback
    #[error("No candidates available for recommendation")]
    NoCandidates,
}

/// Serialize TmdbError as a string for Tauri compatibility
impl Serialize for TmdbError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Reelpick core operations
pub type Result<T> = std::result::Result<T, TmdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api_status() {
        let error = TmdbError::Api {
            endpoint: "/movie/popular".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "TMDB returned status 503 for /movie/popular"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = TmdbError::NotFound("/movie/597".to_string());
        assert_eq!(error.to_string(), "Not found: /movie/597");
    }

    #[test]
    fn test_error_display_empty_query() {
        let error = TmdbError::EmptyQuery;
        assert_eq!(error.to_string(), "Search query cannot be empty");
    }

    #[test]
    fn test_error_display_no_candidates() {
        let error = TmdbError::NoCandidates;
        assert_eq!(
            error.to_string(),
            "No candidates available for recommendation"
        );
    }

    #[test]
    fn test_error_serialize() {
        let error = TmdbError::EmptyQuery;
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Search query cannot be empty\"");
    }

    #[test]
    fn test_error_serialize_not_found() {
        let error = TmdbError::NotFound("/movie/0".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Not found: /movie/0\"");
    }
}
