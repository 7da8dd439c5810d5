//! Error types for cms-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] cms_core::Error),

    #[error("Stored blob '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: cms_core::Error,
    },

    #[error("Invalid blob key: {0}")]
    InvalidKey(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
