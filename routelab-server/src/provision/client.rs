//! HTTP download of dataset files that are not on disk yet.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use super::error::ProvisionError;

/// Default request timeout. The route dataset is tens of megabytes.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// What happened when a file was ensured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioned {
    /// The file was already on disk; nothing was fetched.
    AlreadyPresent,
    /// The file was downloaded.
    Downloaded { bytes: usize },
    /// The file is missing and there is no URL to fetch it from.
    NoSource,
}

/// Client that downloads dataset files.
#[derive(Debug, Clone)]
pub struct DownloadClient {
    http: reqwest::Client,
}

impl DownloadClient {
    /// Create a client with the default timeout.
    pub fn new() -> Result<Self, ProvisionError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProvisionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Make sure `path` exists, downloading it from `url` if needed.
    ///
    /// An existing file is never re-fetched. The body is written to a
    /// temporary sibling and renamed into place, so a failed download never
    /// leaves a truncated file behind.
    pub async fn ensure_file(
        &self,
        url: Option<&str>,
        path: &Path,
    ) -> Result<Provisioned, ProvisionError> {
        if tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Ok(Provisioned::AlreadyPresent);
        }

        let Some(url) = url else {
            warn!(path = %path.display(), "file missing and no download URL configured");
            return Ok(Provisioned::NoSource);
        };

        info!(url, path = %path.display(), "downloading dataset file");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::Api {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        reject_html(url, content_type.as_deref())?;

        let body = response.bytes().await?;
        write_atomically(path, &body).await?;

        info!(path = %path.display(), bytes = body.len(), "dataset file downloaded");
        Ok(Provisioned::Downloaded { bytes: body.len() })
    }
}

/// File hosts answer some failures with an HTML page and a 200 status.
fn reject_html(url: &str, content_type: Option<&str>) -> Result<(), ProvisionError> {
    match content_type {
        Some(ct) if ct.to_lowercase().contains("text/html") => {
            Err(ProvisionError::UnexpectedContentType {
                url: url.to_string(),
                content_type: ct.to_string(),
            })
        }
        _ => Ok(()),
    }
}

async fn write_atomically(path: &Path, body: &[u8]) -> Result<(), ProvisionError> {
    let io_err = |source| ProvisionError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let tmp = partial_path(path);
    tokio::fs::write(&tmp, body).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
