use http_head::ParseError;
use shared::LoggingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

impl CliError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, CliError::Parse(err) if err.is_incomplete())
    }
}
