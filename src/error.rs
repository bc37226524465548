//! Errors raised at the file boundary. The rewrite itself never fails.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("source file not found or unreadable: {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write backup {}", path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid marker config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid markers: {0}")]
    InvalidMarkers(String),
}

pub type Result<T> = std::result::Result<T, Error>;
