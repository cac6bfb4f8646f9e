//! Error types surfaced by the scanner and the upload backends.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a directory scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The root path is missing or is not a directory.
    #[error("The given path either doesn't exist or is not a directory: {}", .path.display())]
    InvalidDirectory { path: PathBuf },
}

/// Errors raised by a storage backend, either while building its client or
/// while uploading a single file.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to read file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Failed to build storage client: {0}")]
    Client(String),
}

pub type UploadResult<T> = Result<T, UploadError>;
