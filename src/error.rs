//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NnError {
    #[error("Shape mismatch in {op}: left is {left:?}, right is {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Data must contain at least one row and one column")]
    EmptyData,

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input size mismatch: network expects {expected} features but got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("backward() called on layer {layer} before any forward pass")]
    NoForwardPass { layer: usize },

    #[error("Invalid configuration for field '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        NnError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NnError>;
