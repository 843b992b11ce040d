//! Error types for cascade configuration and model assembly

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Document model error: {0}")]
    Model(#[from] doc_model::DocModelError),
}

pub type Result<T> = std::result::Result<T, CascadeError>;
