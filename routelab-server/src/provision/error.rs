//! Provisioning error types.

use std::path::PathBuf;

/// Errors that can occur when downloading dataset files.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("download of {url} failed with status {status}")]
    Api { url: String, status: u16 },

    /// Server returned a web page instead of the file
    #[error("download of {url} returned {content_type} instead of a data file")]
    UnexpectedContentType { url: String, content_type: String },

    /// Writing the file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
