//! Error types for ct-trace.

use ct_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type TraceResult<T> = Result<T, TraceError>;
