//! # Catalog Error Types Module
//!
//! This module defines the error types raised while browsing the movie catalog,
//! from the TMDB request through to album delivery on Telegram.

/// Custom error types for catalog browsing
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The catalog API could not be reached or answered with a non-success status
    Upstream {
        /// HTTP status, when a response was received at all
        status: Option<u16>,
        /// Error payload or transport message, kept for logging
        message: String,
    },
    /// Nothing was left to show after filtering
    EmptyResult,
    /// The album could not be delivered to the chat
    Delivery(String),
}

impl CatalogError {
    /// Build an upstream error for a non-success HTTP response
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        CatalogError::Upstream {
            status: Some(status),
            message: body.into(),
        }
    }

    /// Build an upstream error for a transport or decoding failure
    pub fn upstream_transport(message: impl Into<String>) -> Self {
        CatalogError::Upstream {
            status: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Upstream {
                status: Some(status),
                message,
            } => write!(f, "Upstream error (HTTP {status}): {message}"),
            CatalogError::Upstream {
                status: None,
                message,
            } => write!(f, "Upstream error: {message}"),
            CatalogError::EmptyResult => write!(f, "No results found"),
            CatalogError::Delivery(msg) => write!(f, "Delivery error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        let err = err.without_url();
        CatalogError::Upstream {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<teloxide::RequestError> for CatalogError {
    fn from(err: teloxide::RequestError) -> Self {
        CatalogError::Delivery(err.to_string())
    }
}
