use thiserror::Error;

pub type Result<T> = std::result::Result<T, LautaError>;

#[derive(Debug, Error)]
pub enum LautaError {
    #[error("Invalid column ID format: {0}")]
    InvalidColumnId(String),

    #[error("Invalid item ID format: {0}")]
    InvalidItemId(String),

    #[error("Duplicate column ID: {0}")]
    DuplicateColumnId(String),

    #[error("Duplicate item ID: {0}")]
    DuplicateItemId(String),
}
