//! The remote summarization service boundary.
//!
//! The service is a black box reached over HTTP: one multipart submission
//! endpoint and one artifact retrieval endpoint. Nothing here interprets
//! summaries; it classifies responses and hands typed results back to the
//! workflow controller.

mod client;
mod download;
mod error;
mod types;

pub use client::SummarizeClient;
pub use download::resolve_download_url;
pub use error::{ApiError, CONNECT_FALLBACK_MESSAGE};
pub use types::SummarizeResponse;
