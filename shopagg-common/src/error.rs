//! Common error types for the shop aggregator

use thiserror::Error;

/// Common result type for shop aggregator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the aggregator crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
