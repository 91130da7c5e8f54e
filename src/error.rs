use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Unexpected response format from API")]
    UnexpectedFormat,

    #[error("FSM error: {0}")]
    Fsm(String),

    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Recoverable failure classes surfaced to the user as an assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NetworkError,
    HttpError,
    UnexpectedFormat,
    InternalError,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn fsm(msg: impl Into<String>) -> Self {
        Self::Fsm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classifies this error for rendering into a transcript turn.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::NetworkError,
            Self::Http { .. } => ErrorKind::HttpError,
            Self::UnexpectedFormat => ErrorKind::UnexpectedFormat,
            _ => ErrorKind::InternalError,
        }
    }
}
