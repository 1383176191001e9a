//! Unified error type
//!
//! Built on `thiserror` so errors chain through `?` from storage, the REST
//! client and input validation alike.

use std::io;
use thiserror::Error;

/// choreboard error type
#[derive(Debug, Error)]
pub enum ChoreError {
    /// I/O error (config file, log file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialize error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Network-level failure talking to the chore service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The chore service answered with a non-success status
    #[error("Server returned {code}: {message}")]
    Status { code: u16, message: String },

    /// An operation needed a household but none is selected
    #[error("No household selected")]
    NotSelected,

    /// Rejected user input (empty name, zero minutes, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// choreboard Result alias
pub type Result<T> = std::result::Result<T, ChoreError>;

impl ChoreError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<ureq::Error> for ChoreError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .ok()
                    .filter(|body| !body.trim().is_empty())
                    .unwrap_or_else(|| "no body".to_string());
                Self::status(code, message)
            }
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChoreError::transport("connection refused");
        assert_eq!(err.to_string(), "Transport error: connection refused");

        let err = ChoreError::status(404, "task not found");
        assert_eq!(err.to_string(), "Server returned 404: task not found");

        assert_eq!(ChoreError::NotSelected.to_string(), "No household selected");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ChoreError = io_err.into();
        assert!(matches!(err, ChoreError::Io(_)));
    }
}
