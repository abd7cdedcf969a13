use serde::{Deserialize, Serialize};

/// Default for [`MatchOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for the match half of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MatchOptions {
    /// Deepest allowed chain of nested matcher calls, `TOP` counting as 1.
    pub max_depth: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
