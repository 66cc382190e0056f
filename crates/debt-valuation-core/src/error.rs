use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebtValuationError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}
