use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// The targeted record vanished server-side between load and action.
    /// Surfaced distinctly so callers can prompt a refresh instead of a
    /// blind retry.
    #[error("Record not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Transport failure or non-2xx store response. Retryable, never fatal.
    #[error("Store unreachable: {0}")]
    Network(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        InventoryError::Network(err.to_string())
    }
}
