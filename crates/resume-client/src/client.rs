//! HTTP client for the resume parsing service

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, UploadError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback file name when the selected path has none
const FALLBACK_FILE_NAME: &str = "resume";

/// Resume parsing service client
///
/// Uploads a resume file as a `multipart/form-data` POST to the
/// service's `upload-file` endpoint and returns the extracted data as
/// opaque JSON. The base URL (e.g. `http://127.0.0.1:8000/api/v1`) is
/// injected at construction.
#[derive(Debug, Clone)]
pub struct ParserClient {
    client: Client,
    base_url: Url,
}

impl ParserClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the parsing service, including any
    ///   mount prefix (e.g. "http://127.0.0.1:8000/api/v1")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(UploadError::Transport)?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL under the base URL.
    ///
    /// `Url::join` would drop the last base segment for prefixed bases
    /// like `/api/v1`, so the path is appended textually instead.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(Into::into)
    }

    /// Upload a resume and return the parsed result
    ///
    /// The request body is `multipart/form-data` with exactly one part
    /// named `file` holding `bytes` under `file_name`. Any transport
    /// failure or non-2xx status is a uniform upload failure; the
    /// response body of failures is not inspected. A 2xx response is
    /// decoded as JSON of arbitrary shape.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<serde_json::Value> {
        let url = self.endpoint("upload-file")?;
        debug!("Uploading {} to {}", file_name, url);

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(UploadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Upload rejected with status {}", status);
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(UploadError::Transport)?;
        serde_json::from_str(&body).map_err(|e| UploadError::Decode(e.to_string()))
    }

    /// Upload a resume from disk
    ///
    /// Reads the file and delegates to [`upload_file`], using the
    /// path's final component as the uploaded file name.
    ///
    /// [`upload_file`]: ParserClient::upload_file
    #[instrument(skip(self))]
    pub async fn upload_path(&self, path: impl AsRef<Path> + std::fmt::Debug) -> Result<serde_json::Value> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        self.upload_file(&file_name, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ParserClient::new("http://127.0.0.1:8000/api/v1");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = ParserClient::new("not a url");
        assert!(matches!(client, Err(UploadError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let client = ParserClient::new("http://127.0.0.1:8000/api/v1").unwrap();
        let url = client.endpoint("upload-file").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/v1/upload-file"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = ParserClient::new("http://127.0.0.1:8000/api/v1/").unwrap();
        let url = client.endpoint("upload-file").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/v1/upload-file"
        );
    }
}
