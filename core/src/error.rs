use crate::types::BusinessLine;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name:   String,
        value:  String,
        reason: String,
    },

    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("Division by zero computing {} volume: customers_total is 0", .line.label())]
    DivisionByZero { line: BusinessLine },

    #[error("Cannot read {path}: {source}")]
    Io {
        path:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ModelError {
    pub fn invalid(name: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ModelError::InvalidParameter {
            name:   name.to_string(),
            value:  value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
