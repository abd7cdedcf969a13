use super::token::*;
use crate::options::{CompileOptions, LiteralPolicy};
use crate::{SyntaxError, SyntaxResult};
use logos::Logos;
use miette::SourceSpan;

/// Lexes grammar source into a vector of tokens.
///
/// Unterminated literals are accepted and run to the end of the source.
pub fn tokenize(source: &str) -> SyntaxResult<Vec<Token<'_>>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let range = lexer.span();
        let lexeme = &source[range.clone()];
        let span = SourceSpan::new(range.start.into(), range.len());

        match kind {
            TokenKind::Error => {
                return Err(SyntaxError::Scan {
                    span,
                    message: format!("Unrecognized input: '{}'", lexeme),
                });
            }
            _ => {
                tokens.push(Token { kind, lexeme, span });
            }
        }
    }

    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Lexes grammar source, then applies the configured literal policy.
pub fn tokenize_with<'a>(source: &'a str, options: &CompileOptions) -> SyntaxResult<Vec<Token<'a>>> {
    let tokens = tokenize(source)?;

    if options.unterminated_literals == LiteralPolicy::Reject {
        if let Some(open) = tokens.iter().find(|t| t.is_unterminated_literal()) {
            return Err(SyntaxError::UnterminatedLiteral { span: open.span });
        }
    }

    Ok(tokens)
}
