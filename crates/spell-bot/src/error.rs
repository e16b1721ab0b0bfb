//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Signal error: {0}")]
    Signal(#[from] signal_client::SignalError),

    #[error("Spell API error: {0}")]
    SpellApi(#[from] spell_api_client::SpellApiError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
