//! condense: terminal client for a remote extractive-summarization service.
//!
//! The library is split along the workflow's seams:
//!
//! - [`workflow`]: the submission state machine. File selection, tunable
//!   parameters, one-at-a-time request admission, and the single
//!   authoritative outcome slot.
//! - [`api`]: the HTTP boundary. Multipart submission, response
//!   classification, and download-artifact resolution.
//! - [`config`]: TOML configuration and the persisted theme preference.
//! - [`ui`]: the ratatui presentation layer. Renders workflow state and
//!   fires intents into the controller, never owns workflow state itself.

pub mod api;
pub mod config;
pub mod ui;
pub mod workflow;
