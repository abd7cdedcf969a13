use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors raised while tokenizing or parsing grammar source.
///
/// Every variant aborts the whole compile call: no grammar from the same
/// source becomes usable once one of these is returned.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum SyntaxError {
    /// The lexer could not make sense of a piece of the source.
    #[error("Scan error: {message}")]
    #[diagnostic(code(grammex_syntax::scan_error))]
    Scan {
        message: String,
        #[label("could not scan this")]
        span: SourceSpan,
    },

    /// A token showed up where the grammar-of-grammars does not allow it.
    #[error("Syntax error: expected {expected}, found `{found}`")]
    #[diagnostic(code(grammex_syntax::unexpected_token))]
    UnexpectedToken {
        found: String,
        expected: String,
        #[label("unexpected token")]
        span: SourceSpan,
    },

    /// The source ended inside a grammar or matcher block.
    #[error("Syntax error: unexpected end of input, expected {expected}")]
    #[diagnostic(
        code(grammex_syntax::unexpected_eof),
        help("every opening brace needs a matching closing brace")
    )]
    UnexpectedEof { expected: String },

    /// A grammar block was closed without defining its entry point.
    #[error("Grammar `{grammar}` has no `TOP` entry")]
    #[diagnostic(
        code(grammex_syntax::missing_top),
        help("define `token TOP` or `rule TOP`; it is where matching starts")
    )]
    MissingTop {
        grammar: String,
        #[label("grammar declared here")]
        span: SourceSpan,
    },

    /// A single-quoted literal ran to the end of the source.
    ///
    /// Only raised when unterminated literals are configured to be rejected.
    #[error("Unterminated string literal")]
    #[diagnostic(code(grammex_syntax::unterminated_literal))]
    UnterminatedLiteral {
        #[label("literal runs to the end of input")]
        span: SourceSpan,
    },

    /// Two grammars in one compile call share a name.
    #[error("Duplicate grammar: `{name}` is defined more than once")]
    #[diagnostic(code(grammex_syntax::duplicate_grammar))]
    DuplicateGrammar {
        name: String,
        #[label("redefined here")]
        span: SourceSpan,
        #[label("first defined here")]
        previous_span: SourceSpan,
    },

    /// Two entries of one grammar share a name.
    #[error("Duplicate entry: `{name}` is defined more than once in grammar `{grammar}`")]
    #[diagnostic(code(grammex_syntax::duplicate_entry))]
    DuplicateEntry {
        grammar: String,
        name: String,
        #[label("redefined here")]
        span: SourceSpan,
        #[label("first defined here")]
        previous_span: SourceSpan,
    },
}

impl SyntaxError {
    /// The location in the grammar source this error points at, if any.
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            SyntaxError::Scan { span, .. }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::MissingTop { span, .. }
            | SyntaxError::UnterminatedLiteral { span }
            | SyntaxError::DuplicateGrammar { span, .. }
            | SyntaxError::DuplicateEntry { span, .. } => Some(*span),
            SyntaxError::UnexpectedEof { .. } => None,
        }
    }
}
