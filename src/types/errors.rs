use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AffinityError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for AffinityError {
    fn from(error: sqlx::Error) -> Self {
        AffinityError::Database(error.to_string())
    }
}

impl From<serde_json::Error> for AffinityError {
    fn from(error: serde_json::Error) -> Self {
        AffinityError::Parse(error.to_string())
    }
}

impl Serialize for AffinityError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type AffinityResult<T> = Result<T, AffinityError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
