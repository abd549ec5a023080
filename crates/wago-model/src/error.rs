use thiserror::Error;

/// Errors raised when raw integers fall outside a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown item class id: {0}")]
    UnknownClass(i64),
    #[error("unknown item quality id: {0}")]
    UnknownQuality(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
