//! HTTP client for the summarization service.

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::api::download::resolve_download_url;
use crate::api::error::ApiError;
use crate::api::types::{ErrorBody, SummarizeResponse};
use crate::config::ServiceConfig;
use crate::workflow::{DownloadDescriptor, SubmissionRequest};

/// Fallback when the service reports failure without an `error` field.
const UNSPECIFIED_SERVER_ERROR: &str = "An error occurred during summarization";

/// Client for the remote service. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct SummarizeClient {
    http: Client,
    base_url: String,
}

impl SummarizeClient {
    /// Build a client from service configuration. Timeout policy lives
    /// here, in the transport; the controller never sees it as anything but
    /// an ordinary transport error.
    pub fn new(config: &ServiceConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one document for summarization.
    ///
    /// Multipart fields mirror the service contract: `file` carries the raw
    /// bytes under the original file name, `ratio`/`min`/`max` travel as
    /// decimal strings.
    pub async fn summarize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SummarizeResponse, ApiError> {
        let file = Part::bytes(request.bytes.clone())
            .file_name(request.file_name.clone())
            .mime_str("text/plain")
            .map_err(ApiError::Transport)?;
        let form = Form::new()
            .part("file", file)
            .text("ratio", format!("{}", request.params.ratio))
            .text("min", request.params.min_sentences.to_string())
            .text("max", request.params.max_sentences.to_string());

        let response = self
            .http
            .post(format!("{}/api/summarize", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if status.is_success() {
            serde_json::from_slice::<SummarizeResponse>(&body).map_err(ApiError::MalformedResponse)
        } else {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| UNSPECIFIED_SERVER_ERROR.to_string());
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Retrieve the artifact a successful submission described.
    ///
    /// Every invocation issues a fresh retrieval; the descriptor may have
    /// been garbage-collected server-side since the submission, so this can
    /// fail independently of the submission's success.
    pub async fn download(&self, artifact: &DownloadDescriptor) -> Result<Vec<u8>, ApiError> {
        let url = resolve_download_url(&self.base_url, artifact);
        let response = self.http.get(url).send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: format!("artifact retrieval failed with status {}", status.as_u16()),
            });
        }
        let body = response.bytes().await.map_err(ApiError::Transport)?;
        Ok(body.to_vec())
    }
}
