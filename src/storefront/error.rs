use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl StoreError {
    /// Lookup failures are shown to the shopper as a "not found" page
    /// rather than an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::InvalidCategory(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
