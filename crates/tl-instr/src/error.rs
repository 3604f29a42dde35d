//! Instrument wrapper errors.

use thiserror::Error;

/// Result type for instrument operations.
pub type InstrResult<T> = Result<T, InstrError>;

/// Errors that can occur while driving an instrument.
#[derive(Error, Debug)]
pub enum InstrError {
    /// Transport-level failure reported by the session collaborator.
    #[error("Session error: {message}")]
    Session { message: String },

    /// Parameter outside the device's accepted limits; nothing was written.
    #[error("Invalid parameter: {what}")]
    InvalidParam { what: &'static str },

    /// The instrument's reply could not be parsed as the expected value.
    #[error("Malformed reply {reply:?}")]
    MalformedReply {
        reply: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl InstrError {
    /// Wrap a transport error message from a session implementation.
    pub fn session(message: impl Into<String>) -> Self {
        InstrError::Session {
            message: message.into(),
        }
    }
}
