use super::state::State;
use crate::ast::GrammarDecl;
use crate::lexer::Token;
use crate::observer::CompileObserver;
use crate::options::{CompileOptions, DuplicatePolicy};
use crate::{SyntaxError, SyntaxResult};
use indexmap::IndexMap;

/// Grammar declarations keyed by grammar name, in source order.
pub type GrammarDecls<'a> = IndexMap<&'a str, GrammarDecl<'a>>;

/// Run the state machine over a whole token sequence.
///
/// All-or-nothing: the first error aborts and nothing parsed so far is
/// returned. Ending anywhere but between grammar blocks is an error.
pub fn parse_grammars<'a>(
    tokens: &[Token<'a>],
    options: &CompileOptions,
    observer: &mut dyn CompileObserver,
) -> SyntaxResult<GrammarDecls<'a>> {
    let mut grammars = GrammarDecls::new();
    let mut state = State::default();

    for token in tokens {
        let from = state.kind();
        let (next, closed) = state.step(token, options)?;
        observer.on_transition(from, next.kind(), token);

        if let Some(grammar) = closed {
            observer.on_grammar(&grammar);
            insert_grammar(&mut grammars, grammar, options.duplicates)?;
        }
        state = next;
    }

    state.finish()?;
    Ok(grammars)
}

fn insert_grammar<'a>(
    grammars: &mut GrammarDecls<'a>,
    grammar: GrammarDecl<'a>,
    policy: DuplicatePolicy,
) -> SyntaxResult<()> {
    if let Some(previous) = grammars.get(grammar.name) {
        match policy {
            DuplicatePolicy::Reject => {
                return Err(SyntaxError::DuplicateGrammar {
                    name: grammar.name.to_string(),
                    span: grammar.span,
                    previous_span: previous.span,
                });
            }
            DuplicatePolicy::LastWins => {
                log::warn!("grammar `{}` redefined; keeping the later definition", grammar.name);
            }
        }
    }
    grammars.insert(grammar.name, grammar);
    Ok(())
}
