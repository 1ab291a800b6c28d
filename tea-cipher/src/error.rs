//! Error types for cipher and mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("Invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlock { expected: usize, actual: usize },

    #[error("Unsupported cipher mode: {0}")]
    InvalidMode(String),

    #[error("Invalid IV: expected {expected} bytes, got {}", describe_len(.actual))]
    InvalidIv {
        expected: usize,
        actual: Option<usize>,
    },
}

fn describe_len(len: &Option<usize>) -> String {
    match len {
        Some(len) => len.to_string(),
        None => "none".to_string(),
    }
}

impl CipherError {
    /// True for both malformed key lengths and undecodable key strings.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            CipherError::InvalidKey { .. } | CipherError::InvalidKeyEncoding(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
