//! Error taxonomy for a counter invocation.

use thiserror::Error;

/// Stable codes for the two request failure kinds.
///
/// Not part of the response body (which stays `{"error": ...}`); used as a
/// structured log field so failures can be filtered without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// The atomic increment call itself failed.
    StoreFailure,
    /// The store replied but the record could not be interpreted.
    DecodeFailure,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::StoreFailure => "STORE_FAILURE",
            ClientCode::DecodeFailure => "DECODE_FAILURE",
        }
    }
}

/// Failure reported by a [`crate::CounterStore`] backend.
///
/// The message is embedded verbatim into the store-failure response body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Error surfaced by [`crate::CounterService`]. The `Display` output is the
/// exact text placed in the `error` field of the response body.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("Failed to update count: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to parse count: {0}")]
    Decode(String),
}

impl CounterError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            CounterError::Store(_) => ClientCode::StoreFailure,
            CounterError::Decode(_) => ClientCode::DecodeFailure,
        }
    }
}
