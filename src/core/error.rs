//! Error types and error handling for the RunDeck option provider.
//!
//! This module defines the error types used throughout the
//! application. Mapping to HTTP status codes lives in the `http`
//! adapter.

use thiserror::Error;

/// Result type alias for option provider operations
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Main error type for the option provider service
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The `r` parameter named a repository the gateway does not know
    #[error("No repository at {0}")]
    NoSuchRepository(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Not acceptable: only application/json is supported (Accept: {0})")]
    NotAcceptable(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl OptionsError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, OptionsError::NoSuchRepository(_))
    }

    /// Check if the caller failed authentication
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, OptionsError::Unauthorized)
    }

    /// Check if the requested representation cannot be produced
    pub fn is_not_acceptable(&self) -> bool {
        matches!(self, OptionsError::NotAcceptable(_))
    }

    /// Caused by the request rather than by the service
    pub fn is_client_error(&self) -> bool {
        self.is_bad_request() || self.is_unauthorized() || self.is_not_acceptable()
    }
}
