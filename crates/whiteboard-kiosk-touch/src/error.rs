//! Touch subsystem errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TouchError {
    #[error("invalid trace record on line {line}: {source}")]
    Trace {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
