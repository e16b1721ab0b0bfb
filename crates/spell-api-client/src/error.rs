//! Spell API client errors.

use thiserror::Error;

/// Failure to turn a lookup body into spells.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Empty response body")]
    EmptyPayload,

    #[error("Unrecognized response shape (starts with {0:?})")]
    UnrecognizedShape(char),

    #[error("Malformed spell record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SpellApiError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Nothing to add: the spell payload is empty")]
    EmptyPayload,

    #[error("Invalid spell payload: {0}")]
    InvalidPayload(#[from] serde_yaml::Error),
}
