//! Error types.
//!
//! The `AppError` enum is the top-level error type returned by startup and bot
//! operations. It wraps domain-specific errors such as `ConfigError` and the errors of
//! the libraries the bot drives. Counting itself never fails: ignored input is an
//! outcome, not an error.

pub mod config;

use dioxus_logger::tracing::subscriber::SetGlobalDefaultError;
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Prevents the bot from starting.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size. Raised when building or running the client fails, or
    /// when sending a message or reaction fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The global tracing subscriber could not be installed.
    ///
    /// Occurs when logging is initialized more than once in the same process.
    #[error(transparent)]
    LoggerErr(#[from] SetGlobalDefaultError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
