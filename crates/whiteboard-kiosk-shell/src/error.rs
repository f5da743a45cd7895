//! Shell errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("browser engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("cookie store {}: {source}", path.display())]
    CookieStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
