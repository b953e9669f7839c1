// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Copysmith
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Message returned on every generation request when no generator is configured.
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Generative AI model is not initialized.";

/// Main error type for Copysmith operations
#[derive(Error, Debug)]
pub enum CopysmithError {
    /// Errors reported by the remote generation service
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The generation capability was not configured at startup
    #[error("{}", MODEL_UNAVAILABLE_MESSAGE)]
    ModelUnavailable,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failed (invalid API key)
    #[error("Authentication failed: invalid API key")]
    AuthenticationFailed,

    /// Rate limited by the API
    #[error("Rate limited: retry after {0} seconds")]
    RateLimited(u32),

    /// Requested model not found
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// The service rejected the request itself
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid response from API
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The prompt or the candidate was blocked by the service
    #[error("Content blocked: {0}")]
    Blocked(String),

    /// API returned an error
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// Whether the failure is likely to go away on its own.
    ///
    /// Only used for log classification; requests are never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::RateLimited(_) | ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::ServerError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for Copysmith operations
pub type Result<T> = std::result::Result<T, CopysmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_unavailable_message_is_exact() {
        let err = CopysmithError::ModelUnavailable;
        assert_eq!(err.to_string(), "Generative AI model is not initialized.");
    }

    #[test]
    fn test_config_error() {
        let err = CopysmithError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_invalid_input() {
        let err = CopysmithError::InvalidInput("bad input".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CopysmithError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_api_error() {
        let err: CopysmithError = ApiError::AuthenticationFailed.into();
        assert!(err.to_string().contains("API error"));
        assert!(err.to_string().contains("Authentication failed"));
    }

    #[test]
    fn test_api_error_server_error() {
        let err = ApiError::ServerError {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::RateLimited(10).is_transient());
        assert!(ApiError::Network("reset".to_string()).is_transient());
        assert!(ApiError::ServerError {
            status: 500,
            message: String::new()
        }
        .is_transient());

        assert!(!ApiError::AuthenticationFailed.is_transient());
        assert!(!ApiError::InvalidRequest("bad".to_string()).is_transient());
        assert!(!ApiError::ServerError {
            status: 418,
            message: String::new()
        }
        .is_transient());
    }
}
