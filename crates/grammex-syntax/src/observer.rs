use crate::ast::GrammarDecl;
use crate::lexer::Token;
use crate::parser::StateKind;

/// Hooks into the grammar compiler.
///
/// Passed explicitly into parsing instead of toggling a process-wide debug
/// flag. Every method defaults to doing nothing.
pub trait CompileObserver {
    /// Called after `token` moved the parser from `from` to `to`.
    fn on_transition(&mut self, _from: StateKind, _to: StateKind, _token: &Token<'_>) {}

    /// Called when a grammar block closes successfully.
    fn on_grammar(&mut self, _grammar: &GrammarDecl<'_>) {}
}

/// The default observer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCompileObserver;

impl CompileObserver for NoopCompileObserver {}

/// Forwards compiler events to the `log` facade at trace/debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCompileObserver;

impl CompileObserver for LogCompileObserver {
    fn on_transition(&mut self, from: StateKind, to: StateKind, token: &Token<'_>) {
        log::trace!("parse [token={:?}] {:?} -> {:?}", token.lexeme, from, to);
    }

    fn on_grammar(&mut self, grammar: &GrammarDecl<'_>) {
        log::debug!(
            "closed grammar `{}` with {} entries",
            grammar.name,
            grammar.entries.len()
        );
    }
}
