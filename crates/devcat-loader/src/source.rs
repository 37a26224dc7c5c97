//! Where spreadsheet bytes come from: a local file or an HTTP(S) URL.
//!
//! A missing file and a `404` both mean "no catalog yet" and resolve to
//! `Ok(None)`. Every other failure is a [`LoaderError`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use devcat_config::{SourceConfig, SourceLocation};

use crate::error::LoaderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    File(PathBuf),
    Remote { url: String, timeout: Duration },
}

impl RecordSource {
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        match config.location() {
            SourceLocation::File(path) => Self::File(PathBuf::from(path)),
            SourceLocation::Url(url) => Self::Remote {
                url: url.to_string(),
                timeout: Duration::from_secs(config.timeout_secs),
            },
        }
    }

    /// Fetch the raw workbook bytes, or `None` if the source does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Io`] for unreadable files,
    /// [`LoaderError::Http`] for transport failures, and [`LoaderError::Api`]
    /// for non-success responses other than `404`.
    pub async fn fetch(&self) -> Result<Option<Vec<u8>>, LoaderError> {
        match self {
            Self::File(path) => match tokio::fs::read(path).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(error) => Err(error.into()),
            },
            Self::Remote { url, timeout } => {
                let client = reqwest::Client::builder()
                    .user_agent("devcatalog/0.1")
                    .timeout(*timeout)
                    .build()?;
                let resp = client.get(url).send().await?;
                let Some(resp) = check_response(resp).await? else {
                    return Ok(None);
                };
                Ok(Some(resp.bytes().await?.to_vec()))
            }
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote { url, .. } => f.write_str(url),
        }
    }
}

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success and `None` on `404`. Any other
/// non-success status becomes [`LoaderError::Api`] with the response body.
async fn check_response(
    resp: reqwest::Response,
) -> Result<Option<reqwest::Response>, LoaderError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !resp.status().is_success() {
        return Err(LoaderError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(Some(resp))
}
