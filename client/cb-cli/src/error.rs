use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] cb_config::ConfigError),

    #[error("{0}")]
    Client(#[from] cb_client::ClientError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Message the backend sent, to show as-is
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            CliError::Client(e) => e.backend_message(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, CliError::Client(e) if e.is_network())
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
