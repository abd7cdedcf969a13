use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use crate::options::CompileOptions;
use crate::{SyntaxError, SyntaxResult};

/// The grammar or matcher waiting for its label and opening brace.
///
/// This is the parser's context flag: it decides whether a label names the
/// enclosing grammar or the matcher currently being declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending<'a> {
    Grammar(GrammarDecl<'a>),
    Matcher(GrammarDecl<'a>, MatcherDecl<'a>),
}

impl<'a> Pending<'a> {
    fn labelled(self, token: &Token<'a>) -> Self {
        match self {
            Pending::Grammar(mut grammar) => {
                grammar.name = token.lexeme;
                grammar.span = token.span;
                Pending::Grammar(grammar)
            }
            Pending::Matcher(grammar, mut matcher) => {
                matcher.name = token.lexeme;
                matcher.span = token.span;
                Pending::Matcher(grammar, matcher)
            }
        }
    }
}

/// Parser state. Each state owns whatever is under construction, so a
/// transition is a plain function from (state, token) to the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State<'a> {
    #[default]
    ExpectingGrammarKeyword,
    ExpectingLabel(Pending<'a>),
    ExpectingOpenBrace(Pending<'a>),
    ExpectingMatcherKeywordOrClose(GrammarDecl<'a>),
    ExpectingMatcherBody(GrammarDecl<'a>, MatcherDecl<'a>),
}

/// Payload-free view of [`State`], used for observation and diagnostics.
///
/// Label states are split by scope here; in [`State`] the scope lives in
/// the [`Pending`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    ExpectingGrammarKeyword,
    ExpectingLabel,
    ExpectingOpenBrace,
    ExpectingMatcherKeywordOrClose,
    ExpectingMatcherLabel,
    ExpectingMatcherBody,
}

impl StateKind {
    /// What the parser wants to see next, phrased for error messages.
    pub fn expected(self) -> &'static str {
        match self {
            StateKind::ExpectingGrammarKeyword => "keyword `grammar`",
            StateKind::ExpectingLabel => "a grammar name",
            StateKind::ExpectingMatcherLabel => "a token or rule name",
            StateKind::ExpectingOpenBrace => "`{`",
            StateKind::ExpectingMatcherKeywordOrClose => "keyword `token` or `rule`",
            StateKind::ExpectingMatcherBody => "an atom or `}`",
        }
    }
}

impl<'a> State<'a> {
    pub fn kind(&self) -> StateKind {
        match self {
            State::ExpectingGrammarKeyword => StateKind::ExpectingGrammarKeyword,
            State::ExpectingLabel(Pending::Grammar(_)) => StateKind::ExpectingLabel,
            State::ExpectingLabel(Pending::Matcher(..)) => StateKind::ExpectingMatcherLabel,
            State::ExpectingOpenBrace(_) => StateKind::ExpectingOpenBrace,
            State::ExpectingMatcherKeywordOrClose(_) => StateKind::ExpectingMatcherKeywordOrClose,
            State::ExpectingMatcherBody(..) => StateKind::ExpectingMatcherBody,
        }
    }

    /// Consume one token.
    ///
    /// Returns the next state and, when the token closed a grammar block,
    /// the finished grammar.
    pub fn step(
        self,
        token: &Token<'a>,
        options: &CompileOptions,
    ) -> SyntaxResult<(State<'a>, Option<GrammarDecl<'a>>)> {
        let expected = self.kind().expected();

        match self {
            State::ExpectingGrammarKeyword => match token.kind {
                TokenKind::GrammarKeyword => {
                    let grammar = GrammarDecl::new(token.span);
                    Ok((State::ExpectingLabel(Pending::Grammar(grammar)), None))
                }
                _ => Err(unexpected(token, expected)),
            },

            State::ExpectingLabel(pending) => {
                Ok((State::ExpectingOpenBrace(pending.labelled(token)), None))
            }

            State::ExpectingOpenBrace(pending) => match token.kind {
                TokenKind::LBrace => {
                    let next = match pending {
                        Pending::Grammar(grammar) => State::ExpectingMatcherKeywordOrClose(grammar),
                        Pending::Matcher(grammar, matcher) => {
                            State::ExpectingMatcherBody(grammar, matcher)
                        }
                    };
                    Ok((next, None))
                }
                _ => Err(unexpected(token, expected)),
            },

            State::ExpectingMatcherKeywordOrClose(grammar) => match token.kind {
                TokenKind::TokenKeyword | TokenKind::RuleKeyword => {
                    let kind = if token.kind == TokenKind::TokenKeyword {
                        MatcherKind::Token
                    } else {
                        MatcherKind::Rule
                    };
                    let matcher = MatcherDecl::new(kind, token.span);
                    Ok((State::ExpectingLabel(Pending::Matcher(grammar, matcher)), None))
                }
                TokenKind::RBrace => {
                    if !grammar.has_top() {
                        return Err(SyntaxError::MissingTop {
                            grammar: grammar.name.to_string(),
                            span: grammar.span,
                        });
                    }
                    Ok((State::ExpectingGrammarKeyword, Some(grammar)))
                }
                _ => Err(unexpected(token, expected)),
            },

            State::ExpectingMatcherBody(mut grammar, mut matcher) => match token.kind {
                TokenKind::RBrace => {
                    grammar.insert_entry(matcher, options.duplicates)?;
                    Ok((State::ExpectingMatcherKeywordOrClose(grammar), None))
                }
                _ => {
                    matcher.atoms.push(AtomDecl {
                        text: token.lexeme,
                        span: token.span,
                    });
                    Ok((State::ExpectingMatcherBody(grammar, matcher), None))
                }
            },
        }
    }

    /// Called once the tokens run out; only the initial state is a valid end.
    pub fn finish(self) -> SyntaxResult<()> {
        match self {
            State::ExpectingGrammarKeyword => Ok(()),
            other => Err(SyntaxError::UnexpectedEof {
                expected: other.kind().expected().to_string(),
            }),
        }
    }
}

fn unexpected(token: &Token<'_>, expected: &str) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.lexeme.to_string(),
        expected: expected.to_string(),
        span: token.span,
    }
}
