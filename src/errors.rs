//! Unified error type for the Product API.
//!
//! Every failure a request can hit ends up as one of these variants. The
//! HTTP mapping lives in [`crate::api::response`].

use thiserror::Error;

/// Errors raised by the store, the request handlers and startup code.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested product id does not exist.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// Malformed body, wrong field types, or bad query/path parameters.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable reason
        message: String,
    },

    /// The persistence backend failed or could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// I/O failure, e.g. binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
