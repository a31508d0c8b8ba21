//! The single authoritative result state of the most recent submission.

/// Opaque identifiers the service assigns to a generated summary artifact.
///
/// Both fields are server-chosen and carry no local validity guarantee;
/// they are used only to build a retrieval request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDescriptor {
    pub server_path: String,
    pub download_name: String,
}

/// Outcome of the most recent summarization attempt.
///
/// Exactly one variant is active at any time. New selections reset the slot
/// to [`Idle`](Self::Idle); every submission passes through
/// [`InFlight`](Self::InFlight) and terminates in
/// [`Success`](Self::Success) or [`Failure`](Self::Failure), overwriting
/// whatever came before.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionOutcome {
    /// No submission has run since the last selection (or startup).
    #[default]
    Idle,

    /// A request is outstanding.
    InFlight,

    /// The service produced a summary and an artifact to retrieve it from.
    Success {
        summary: String,
        artifact: DownloadDescriptor,
    },

    /// The submission failed; `message` is ready for display.
    Failure { message: String },
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// The stored summary text, when the last submission succeeded.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Success { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// The artifact descriptor, when the last submission succeeded.
    pub fn artifact(&self) -> Option<&DownloadDescriptor> {
        match self {
            Self::Success { artifact, .. } => Some(artifact),
            _ => None,
        }
    }

    /// The stored error message, when the last submission failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }
}
