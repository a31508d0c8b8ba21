//! The submission workflow state machine.
//!
//! State is held in explicit containers with named transition operations,
//! never ad-hoc field writes:
//!
//! - [`FileSelection`] owns the currently selected [`Document`] and is the
//!   single entry point for validating candidates, whatever input channel
//!   they arrived through.
//! - [`ParameterStore`] owns the three tunables and keeps
//!   `min_sentences <= max_sentences` true after every update.
//! - [`SubmissionController`] owns the [`SubmissionOutcome`] slot and the
//!   busy flag gating admission of new submissions.

mod controller;
mod document;
mod error;
mod outcome;
mod params;

pub use controller::{SubmissionController, SubmissionRequest, NO_FILE_MESSAGE};
pub use document::{Document, FileSelection};
pub use error::{SelectError, WorkflowError};
pub use outcome::{DownloadDescriptor, SubmissionOutcome};
pub use params::{ParameterStore, SummaryParameters};
