//! Console adapter error types.

use casahub_domain::error::HouseError;

/// Errors specific to the console reporter.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The underlying writer failed.
    #[error("failed to write console output")]
    Write(#[from] std::io::Error),

    /// A JSON line could not be produced.
    #[error("failed to serialize console output")]
    Serialize(#[from] serde_json::Error),
}

impl From<ConsoleError> for HouseError {
    fn from(err: ConsoleError) -> Self {
        Self::Output(Box::new(err))
    }
}
