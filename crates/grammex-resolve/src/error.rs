use grammex_syntax::SyntaxError;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors that can occur while resolving atom descriptors.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum ResolutionError {
    /// A `<name>` atom names an entry its grammar does not define.
    #[error("Reference not found: `<{reference}>` in entry `{entry}` of grammar `{grammar}`")]
    #[diagnostic(
        code(grammex_resolve::reference_not_found),
        help("references only see entries of their own grammar")
    )]
    ReferenceNotFound {
        grammar: String,
        /// The entry whose body holds the bad reference.
        entry: String,
        /// The name between the angle brackets.
        reference: String,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// Builder input that grammar source has no way to spell.
    #[error("Cannot write `{text}` in grammar `{grammar}` as a single {role}")]
    #[diagnostic(
        code(grammex_resolve::unrepresentable),
        help("names and atoms are single whitespace-free tokens; literals cannot contain `'`")
    )]
    Unrepresentable {
        grammar: String,
        /// The offending name or atom descriptor.
        text: String,
        /// What `text` was meant to be, e.g. "entry name".
        role: &'static str,
    },
}

/// Anything that stops a compile call. Nothing compiled survives one of these.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolution(#[from] ResolutionError),
}
