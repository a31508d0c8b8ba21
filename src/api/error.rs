//! Error classification for the service boundary.

use thiserror::Error;

/// Generic fallback when the request never completed or the response shape
/// was unusable. Matches the message users of the web UI see.
pub const CONNECT_FALLBACK_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Errors from talking to the summarization service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service responded but declined to produce a result.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request could not be completed at all.
    #[error("failed to reach the summarization service")]
    Transport(#[source] reqwest::Error),

    /// A success status arrived with a body we could not interpret.
    #[error("unexpected response from the summarization service")]
    MalformedResponse(#[source] serde_json::Error),
}

impl ApiError {
    /// The message to surface to the user: server-supplied when the service
    /// answered, the generic connectivity fallback otherwise.
    ///
    /// The controller treats transport errors identically regardless of
    /// cause, so timeout, refusal, and a garbled body all collapse to the
    /// same fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::MalformedResponse(_) => {
                CONNECT_FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
