//! The three summarization tunables and their legal ranges.

use serde::{Deserialize, Serialize};

/// Fraction of the original text to keep.
pub const RATIO_MIN: f64 = 0.1;
pub const RATIO_MAX: f64 = 0.9;
/// Slider granularity for the ratio control.
pub const RATIO_STEP: f64 = 0.1;

pub const MIN_SENTENCES_FLOOR: u32 = 1;
pub const MIN_SENTENCES_CEIL: u32 = 20;
/// Hard ceiling for `max_sentences`; its floor is the current
/// `min_sentences`.
pub const MAX_SENTENCES_CEIL: u32 = 50;

/// Tunables controlling extractive summary length.
///
/// Invariant: `min_sentences <= max_sentences` holds at all times. The
/// store enforces it by clamping the dependent bound, so no observer ever
/// sees it violated, even transiently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryParameters {
    pub ratio: f64,
    pub min_sentences: u32,
    pub max_sentences: u32,
}

impl Default for SummaryParameters {
    fn default() -> Self {
        Self {
            ratio: 0.3,
            min_sentences: 3,
            max_sentences: 10,
        }
    }
}

/// Holds the current [`SummaryParameters`]; mutation goes through named
/// per-field setters, one field at a time.
///
/// Resolution rule for the paired bounds, applied in both directions:
/// raising `min_sentences` past `max_sentences` drags `max_sentences` up
/// with it, and writing `max_sentences` below `min_sentences` clamps it up
/// to `min_sentences`.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    current: SummaryParameters,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current values, taken at submission time so in-flight
    /// requests are immune to later edits.
    pub fn snapshot(&self) -> SummaryParameters {
        self.current
    }

    pub fn ratio(&self) -> f64 {
        self.current.ratio
    }

    pub fn min_sentences(&self) -> u32 {
        self.current.min_sentences
    }

    pub fn max_sentences(&self) -> u32 {
        self.current.max_sentences
    }

    /// Set the ratio, clamped into `[0.1, 0.9]` and rounded to the slider
    /// granularity. Non-finite input is ignored.
    pub fn set_ratio(&mut self, value: f64) {
        if !value.is_finite() {
            tracing::warn!(value, "ignoring non-finite ratio");
            return;
        }
        let rounded = (value * 10.0).round() / 10.0;
        self.current.ratio = rounded.clamp(RATIO_MIN, RATIO_MAX);
    }

    /// Set the lower sentence bound, clamped into `[1, 20]`. When the new
    /// floor passes the current ceiling, the ceiling is raised to match.
    pub fn set_min_sentences(&mut self, value: u32) {
        let value = value.clamp(MIN_SENTENCES_FLOOR, MIN_SENTENCES_CEIL);
        self.current.min_sentences = value;
        if self.current.max_sentences < value {
            tracing::debug!(raised_to = value, "max_sentences raised to keep bounds ordered");
            self.current.max_sentences = value;
        }
    }

    /// Set the upper sentence bound, clamped into
    /// `[min_sentences, 50]`.
    pub fn set_max_sentences(&mut self, value: u32) {
        self.current.max_sentences = value.clamp(self.current.min_sentences, MAX_SENTENCES_CEIL);
    }

    /// Nudge the ratio by whole slider steps.
    pub fn step_ratio(&mut self, steps: i32) {
        self.set_ratio(self.current.ratio + RATIO_STEP * f64::from(steps));
    }

    /// Nudge the lower sentence bound.
    pub fn step_min_sentences(&mut self, delta: i32) {
        self.set_min_sentences(self.current.min_sentences.saturating_add_signed(delta));
    }

    /// Nudge the upper sentence bound.
    pub fn step_max_sentences(&mut self, delta: i32) {
        self.set_max_sentences(self.current.max_sentences.saturating_add_signed(delta));
    }
}
