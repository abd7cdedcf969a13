use logos::{Lexer, Logos};
use miette::SourceSpan;

/// A token spans from `start` to `end` within the grammar source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub span: SourceSpan,
}

impl<'a> Token<'a> {
    /// True when the token holds a single-quoted literal that never closes.
    ///
    /// Quotes toggle literal mode, so an odd number of them means the last
    /// literal was still open when the source ran out.
    pub fn is_unterminated_literal(&self) -> bool {
        self.lexeme.matches('\'').count() % 2 == 1
    }
}

/// All possible tokens of the grammar-description language.
///
/// Keywords and braces only win when they make up a whole
/// whitespace-delimited token: `}}` or `rules` lex as [`TokenKind::Word`],
/// the same way splitting on whitespace would.
#[derive(Debug, Logos, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // Keywords
    #[token("grammar")]
    GrammarKeyword,
    #[token("token")]
    TokenKeyword,
    #[token("rule")]
    RuleKeyword,

    // Punctuation
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Any other run of non-whitespace. A single quote opens a literal in
    // which whitespace is content; the next quote closes it. An open
    // literal runs to the end of the source.
    #[regex(r"[^\s]+", word)]
    Word,

    // Whitespace (to be skipped)
    #[regex(r"\s+", logos::skip)]
    Whitespace,

    // Catch-all for anything unexpected
    #[error]
    Error,
}

/// Extend a word through any single-quoted literal it opened.
///
/// The regex stops at the first whitespace; if the quotes seen so far are
/// unbalanced that whitespace belongs to a literal, so keep scanning with
/// quotes toggling literal mode until whitespace outside a literal.
fn word(lex: &mut Lexer<TokenKind>) {
    let mut in_literal = lex.slice().matches('\'').count() % 2 == 1;
    let mut extra = 0;

    for c in lex.remainder().chars() {
        if c == '\'' {
            in_literal = !in_literal;
        } else if !in_literal && c.is_whitespace() {
            break;
        }
        extra += c.len_utf8();
    }

    lex.bump(extra);
}
