//! Error taxonomy for catalog requests.

use thiserror::Error;

/// Errors that can occur while talking to the catalog service.
///
/// The `Display` text is what the movies store shows on a failed slice,
/// so it is written for end users first.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Caller misuse, detected before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure: DNS, connect, timeout, reset, or an unusable URL.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status.
    #[error("API error: {status} {status_text}")]
    Remote { status: u16, status_text: String },

    /// The body was not JSON of the expected shape.
    #[error("Failed to decode response at '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The task running the request panicked or was cancelled.
    #[error("Request did not complete: {0}")]
    Interrupted(String),
}

impl CatalogError {
    /// Short machine-friendly label, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::InvalidArgument(_) => "invalid_argument",
            CatalogError::Network { .. } => "network",
            CatalogError::Remote { .. } => "remote",
            CatalogError::Decode { .. } => "decode",
            CatalogError::Interrupted(_) => "interrupted",
        }
    }

    /// HTTP status for `Remote` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(source: reqwest::Error) -> Self {
        CatalogError::Network { source }
    }
}
