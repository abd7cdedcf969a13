use serde::{Deserialize, Serialize};

/// What to do when a name is defined twice in one compile call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateGrammar` / `DuplicateEntry`.
    #[default]
    Reject,
    /// Keep the later definition and log a warning.
    LastWins,
}

/// What to do with a single-quoted literal that never closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralPolicy {
    /// The literal runs to the end of the source and is kept as one token.
    #[default]
    Accept,
    /// Fail with `UnterminatedLiteral`.
    Reject,
}

/// Knobs for the compile half of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompileOptions {
    /// Applies to grammar names within a call and entry names within a grammar.
    pub duplicates: DuplicatePolicy,

    pub unterminated_literals: LiteralPolicy,
}

impl CompileOptions {
    /// Options that reproduce the most permissive behaviour: later
    /// definitions silently replace earlier ones and open literals are kept.
    pub fn permissive() -> Self {
        Self {
            duplicates: DuplicatePolicy::LastWins,
            unterminated_literals: LiteralPolicy::Accept,
        }
    }

    /// Options that turn every questionable construct into an error.
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
            unterminated_literals: LiteralPolicy::Reject,
        }
    }
}
