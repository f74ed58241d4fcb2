//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),
}

impl Error {
    pub(crate) fn malformed(input: &str, reason: impl std::fmt::Display) -> Self {
        Error::MalformedCoordinate(format!("{:?} ({})", input, reason))
    }
}
