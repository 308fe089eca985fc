//! Error types for the qlearning crate

use thiserror::Error;

/// Main error type for the qlearning crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown state {state}")]
    UnknownState { state: String },

    #[error("unknown action {action}")]
    UnknownAction { action: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_state(state: &impl std::fmt::Debug) -> Self {
        Error::UnknownState {
            state: format!("{state:?}"),
        }
    }

    pub(crate) fn unknown_action(action: &impl std::fmt::Debug) -> Self {
        Error::UnknownAction {
            action: format!("{action:?}"),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
