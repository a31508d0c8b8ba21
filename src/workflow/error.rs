//! Error taxonomy for the local side of the workflow.
//!
//! Everything here is synchronous and recoverable: selection rejections
//! never touch held state, and submission precondition failures never reach
//! the network.

use std::path::PathBuf;
use thiserror::Error;

/// A candidate file was refused at selection time.
///
/// Rejection is advisory to the user; the previously held document (if any)
/// and the submission outcome are left untouched.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The candidate's detected content type is not `text/plain`.
    #[error("'{name}' is not a plain text file")]
    UnsupportedType { name: String },

    /// The candidate path does not exist or cannot be inspected.
    #[error("cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A submission failed before any request was issued.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// `submit` was called with no document held.
    #[error("no file selected")]
    NoFileSelected,

    /// A submission is already outstanding; callers must check `is_busy`.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The selected document could not be read back at submission time.
    #[error("failed to read '{path}': {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
