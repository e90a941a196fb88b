//! Error types for the optimization run and the provider adapters.

use thiserror::Error as ThisError;

/// Fatal errors for a whole optimization run.
///
/// Everything else in the engine degrades per stop or per batch and is
/// reported through [`crate::optimizer::BatchStatus`] instead.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("no geocoded stops to optimize")]
    InsufficientData,
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("optimization cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }
}

/// Failure of a single routing-provider call.
///
/// Any of these on the primary attempt moves the batch to the fallback
/// attempt; on the fallback attempt they end the batch.
#[derive(Debug, ThisError)]
pub enum ProviderError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(String),
    #[error("provider returned no routes")]
    NoRoute,
    #[error("provider route is missing an encoded polyline")]
    MissingPolyline,
}
