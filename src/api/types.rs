//! Wire types for the summarization service.

use serde::Deserialize;

/// Success body of `POST /api/summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    /// The extracted summary text.
    pub summary: String,
    /// Server-side location of the generated artifact.
    pub file_path: String,
    /// File name the artifact should be saved under.
    pub download_name: String,
}

/// Error body the service sends with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}
