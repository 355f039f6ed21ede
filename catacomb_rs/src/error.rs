//! Error types of the game driver.

use catacomb_ecs::RegistryError;
use thiserror::Error;

/// General error type of the game driver.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("wrong logger configuration: {0}")]
    LogConfig(String),

    #[error("logger initialization failure: {0}")]
    LoggerInit(#[from] log::SetLoggerError),

    #[error("invalid value `{value}` of environment variable {name}")]
    InvalidVariable { name: &'static str, value: String },

    #[error("system registration failure: {0}")]
    Registry(#[from] RegistryError),
}
