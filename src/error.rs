use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Unspecified(String),

    #[error("{0}")]
    DataFormat(String),

    #[error("{0}")]
    SerializationError(String),

    #[error("{0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Empty response.")]
    EmptyResponse,

    #[error("Throttling.")]
    Throttling,
}

impl Error {
    /// Whether the error happened while fetching, as opposed to while
    /// interpreting a record that was fetched successfully.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::NetworkError(_)
                | Error::ApiError(..)
                | Error::EmptyResponse
                | Error::Throttling
                | Error::SerializationError(_)
        )
    }
}
