//! Configuration options for edit-time definition checks.

use serde::{Deserialize, Serialize};

/// What an inverted numeric range (`min > max`) does to a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangePolicy {
    /// Surface a warning; saving proceeds.
    #[default]
    Warn,
    /// Report an error; the host should refuse to save.
    Block,
}

/// Options controlling definition lint severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintOptions {
    pub numeric_range: RangePolicy,

    /// Report conditional rules pointing at missing fields as errors.
    /// Default: false (such fields just stay hidden).
    pub dangling_conditional_is_error: bool,
}

impl LintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for authors who want every inconsistency to block saving.
    pub fn strict() -> Self {
        Self {
            numeric_range: RangePolicy::Block,
            dangling_conditional_is_error: true,
        }
    }

    pub fn with_numeric_range(mut self, policy: RangePolicy) -> Self {
        self.numeric_range = policy;
        self
    }

    pub fn with_dangling_conditional_error(mut self, enable: bool) -> Self {
        self.dangling_conditional_is_error = enable;
        self
    }
}
