//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by startup code and by command handlers.
//! Startup errors abort the process; handler errors are logged by the interaction
//! dispatcher and turned into a generic reply for the user.

pub mod config;
pub mod steam;

use loldle::CatalogError;
use thiserror::Error;

use crate::error::{config::ConfigError, steam::SteamError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Champion dataset failed to load.
    ///
    /// Fatal: the bot never starts with a partial catalog.
    #[error(transparent)]
    CatalogErr(#[from] CatalogError),

    /// Steam API returned an error status or an unexpected body.
    #[error(transparent)]
    SteamErr(#[from] SteamError),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingErr(String),

    /// Unexpected state with a custom message.
    #[error("{0}")]
    InternalError(String),
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
