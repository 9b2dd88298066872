//! Errors raised while fetching or decoding site content.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("{path}: not found")]
    NotFound { path: String },

    #[error("{path}: server responded with status {status}")]
    Status { path: String, status: u16 },

    #[error("{path}: request failed: {message}")]
    Request { path: String, message: String },

    #[error("invalid URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("{path}: invalid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
