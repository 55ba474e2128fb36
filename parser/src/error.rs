use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No input to scan")]
    NoInput,

    #[error("Delimiter {0:?} not found")]
    NotFound(String),

    #[error("Incomplete message: head/body separator not found")]
    Incomplete,

    #[error("Invalid request line: {0}")]
    InvalidRequestLine(String),

    #[error("Invalid status line: {0}")]
    InvalidStatusLine(String),

    #[error("Invalid header line: {0}")]
    InvalidHeaderLine(String),
}

impl ParseError {
    /// True when the caller should wait for more bytes rather than reject the message.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::Incomplete)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown header name matching mode: {0}")]
    UnknownNameMatching(String),

    #[error("Unknown malformed header policy: {0}")]
    UnknownMalformedHeaderPolicy(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
