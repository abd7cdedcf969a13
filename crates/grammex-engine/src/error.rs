use miette::Diagnostic;
use thiserror::Error;

/// Matching errors. An ordinary mismatch is not one of these; it is the
/// `None` outcome of a match call.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum MatchError {
    /// A matcher was entered again at the offset it is already being
    /// matched at, so the recursion could never make progress.
    #[error("Left recursion: `{matcher}` re-entered at offset {offset} without consuming input")]
    #[diagnostic(
        code(grammex_engine::left_recursion),
        help("make sure every cycle of references consumes a literal before recursing")
    )]
    LeftRecursion { matcher: String, offset: usize },

    /// The call stack grew deeper than `MatchOptions::max_depth`.
    #[error("Recursion limit reached: `{matcher}` at depth {depth}")]
    #[diagnostic(
        code(grammex_engine::recursion_limit),
        help("raise `matching.max-depth` or shorten the input")
    )]
    RecursionLimit { matcher: String, depth: usize },
}

/// Errors loading a [`Config`](crate::Config).
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Error reading grammex configuration: {0}")]
    #[diagnostic(
        code(grammex_engine::config_read),
        help("check that the file exists and is readable")
    )]
    Read(String),

    #[error("Invalid grammex configuration: {0}")]
    #[diagnostic(
        code(grammex_engine::config_parse),
        help("check the values in the `[compile]` and `[matching]` tables")
    )]
    Parse(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Read(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
