use crate::ui::mvi::UiState;

/// The interactive controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    PathInput,
    Ratio,
    MinSentences,
    MaxSentences,
    Submit,
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Self::PathInput => Self::Ratio,
            Self::Ratio => Self::MinSentences,
            Self::MinSentences => Self::MaxSentences,
            Self::MaxSentences => Self::Submit,
            Self::Submit => Self::PathInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::PathInput => Self::Submit,
            Self::Ratio => Self::PathInput,
            Self::MinSentences => Self::Ratio,
            Self::MaxSentences => Self::MinSentences,
            Self::Submit => Self::MaxSentences,
        }
    }

    /// True for the controls that adjust a parameter value.
    pub fn is_parameter(self) -> bool {
        matches!(self, Self::Ratio | Self::MinSentences | Self::MaxSentences)
    }
}

/// UI-local screen state. Workflow state (document, parameters, outcome)
/// lives in the controller and is not mirrored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenState {
    pub focused: Control,
    pub path_input: String,
}

impl UiState for ScreenState {}
