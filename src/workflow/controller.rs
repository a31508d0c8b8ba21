//! The submission controller: admission, snapshotting, outcome application.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::{ApiError, SummarizeClient, SummarizeResponse};
use crate::workflow::document::{Document, FileSelection};
use crate::workflow::error::{SelectError, WorkflowError};
use crate::workflow::outcome::{DownloadDescriptor, SubmissionOutcome};
use crate::workflow::params::{ParameterStore, SummaryParameters};

/// Shown when submission is attempted with no document held.
pub const NO_FILE_MESSAGE: &str = "Please select a text file";

/// Owned snapshot of everything one submission needs.
///
/// Built by [`SubmissionController::begin`]; later selection or parameter
/// edits cannot alter a request that is already pending.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub params: SummaryParameters,
}

/// The workflow state machine.
///
/// Owns the selection, the parameter store, the outcome slot, and the busy
/// flag. All transitions go through named operations; the busy flag is the
/// admission guard that keeps at most one request outstanding.
///
/// `Idle → InFlight → {Success, Failure}`, re-entrant from either terminal
/// state on the next submission.
pub struct SubmissionController {
    selection: FileSelection,
    params: ParameterStore,
    outcome: SubmissionOutcome,
    // Shared with the finalizer guard in `submit`, which must be able to
    // clear it without holding a borrow of the controller across the await.
    busy: Arc<AtomicBool>,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            selection: FileSelection::new(),
            params: ParameterStore::new(),
            outcome: SubmissionOutcome::Idle,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a request is outstanding. Callers must not invoke
    /// [`begin`](Self::begin) or [`submit`](Self::submit) while this holds.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn document(&self) -> Option<&Document> {
        self.selection.current()
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterStore {
        &mut self.params
    }

    /// Select a new document, resetting the outcome slot to clean `Idle` so
    /// stale results never refer to a no-longer-selected file.
    ///
    /// Rejection leaves both the held document and the outcome untouched.
    pub fn select_file(&mut self, path: &Path) -> Result<&Document, SelectError> {
        self.selection.select(path).map(|_| ())?;
        self.outcome = SubmissionOutcome::Idle;
        Ok(self.selection.current().expect("document just selected"))
    }

    /// Synchronous admission: validate preconditions, snapshot the inputs,
    /// and enter `InFlight`.
    ///
    /// Precondition failures are local: no request is issued, the busy flag
    /// stays clear, and the missing-file and unreadable-file cases record a
    /// `Failure` outcome so the message has a persistent home.
    pub fn begin(&mut self) -> Result<SubmissionRequest, WorkflowError> {
        if self.is_busy() {
            return Err(WorkflowError::SubmissionInFlight);
        }

        let document = match self.selection.current() {
            Some(document) => document,
            None => {
                self.outcome = SubmissionOutcome::Failure {
                    message: NO_FILE_MESSAGE.to_string(),
                };
                return Err(WorkflowError::NoFileSelected);
            }
        };

        let bytes = match document.read_bytes() {
            Ok(bytes) => bytes,
            Err(source) => {
                let err = WorkflowError::DocumentRead {
                    path: document.path().to_path_buf(),
                    source,
                };
                self.outcome = SubmissionOutcome::Failure {
                    message: err.to_string(),
                };
                return Err(err);
            }
        };

        let request = SubmissionRequest {
            file_name: document.name().to_string(),
            bytes,
            params: self.params.snapshot(),
        };

        self.busy.store(true, Ordering::SeqCst);
        self.outcome = SubmissionOutcome::InFlight;
        tracing::info!(
            file = %request.file_name,
            size = request.bytes.len(),
            ratio = request.params.ratio,
            min = request.params.min_sentences,
            max = request.params.max_sentences,
            "submission dispatched"
        );
        Ok(request)
    }

    /// Apply the terminal outcome of the request started by
    /// [`begin`](Self::begin).
    ///
    /// The busy flag is cleared as the final step, on every path, so the
    /// submit control is re-enabled after exactly one request/response
    /// cycle.
    pub fn finish(&mut self, result: Result<SummarizeResponse, ApiError>) {
        self.outcome = match result {
            Ok(response) => {
                tracing::info!(artifact = %response.file_path, "submission succeeded");
                SubmissionOutcome::Success {
                    summary: response.summary,
                    artifact: DownloadDescriptor {
                        server_path: response.file_path,
                        download_name: response.download_name,
                    },
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                SubmissionOutcome::Failure {
                    message: err.user_message(),
                }
            }
        };
        self.busy.store(false, Ordering::SeqCst);
    }

    /// One full request/response cycle: `begin`, call the service, `finish`.
    ///
    /// The busy flag cannot survive this function: `finish` clears it on
    /// both outcomes, and the scopeguard clears it even if the future is
    /// dropped mid-flight.
    pub async fn submit(&mut self, client: &SummarizeClient) -> Result<(), WorkflowError> {
        let request = self.begin()?;
        let result = {
            let _clear = scopeguard::guard(Arc::clone(&self.busy), |busy| {
                busy.store(false, Ordering::SeqCst);
            });
            client.summarize(&request).await
        };
        self.finish(result);
        Ok(())
    }
}
