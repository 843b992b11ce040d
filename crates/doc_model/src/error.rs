//! Error types for document model construction

use crate::StyleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Duplicate style id: {0}")]
    DuplicateStyle(StyleId),

    #[error("Invalid list level: {0} (levels are 0-8)")]
    InvalidLevel(u8),

    #[error("Unknown abstract numbering definition: {0}")]
    UnknownAbstractNumbering(u32),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
