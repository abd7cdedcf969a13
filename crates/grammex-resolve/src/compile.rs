use crate::model::Grammar;
use crate::resolver::resolve_grammar;
use crate::CompileResult;
use grammex_syntax::{
    parse_grammars, tokenize_with, CompileObserver, CompileOptions, NoopCompileObserver, Token,
};
use indexmap::IndexMap;

/// Compiled grammars keyed by name, in the order they were declared.
pub type Grammars = IndexMap<String, Grammar>;

/// Compile a token sequence into resolved grammars.
pub fn compile(tokens: &[Token<'_>], options: &CompileOptions) -> CompileResult<Grammars> {
    compile_observed(tokens, options, &mut NoopCompileObserver)
}

/// [`compile`], reporting parser progress to `observer`.
///
/// Parsing finishes for the whole token sequence before any reference is
/// resolved; the first error of either phase aborts the call.
pub fn compile_observed(
    tokens: &[Token<'_>],
    options: &CompileOptions,
    observer: &mut dyn CompileObserver,
) -> CompileResult<Grammars> {
    let decls = parse_grammars(tokens, options, observer)?;

    let mut grammars = Grammars::with_capacity(decls.len());
    for decl in decls.values() {
        let grammar = resolve_grammar(decl)?;
        log::debug!("resolved grammar `{}` ({} entries)", grammar.name(), grammar.len());
        grammars.insert(grammar.name().to_string(), grammar);
    }

    Ok(grammars)
}

/// Tokenize and compile grammar source in one go.
pub fn compile_source(source: &str, options: &CompileOptions) -> CompileResult<Grammars> {
    let tokens = tokenize_with(source, options)?;
    compile(&tokens, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, CompileError, ResolutionError};
    use grammex_syntax::{tokenize, LiteralPolicy, SyntaxError};

    #[test]
    fn test_compile_with_top() -> CompileResult<()> {
        let grammars = compile_source(
            "grammar foo { token TOP { <bar> } token bar { 'exact match' } }",
            &CompileOptions::default(),
        )?;
        let foo = &grammars["foo"];
        assert_eq!(foo.name(), "foo");
        assert_eq!(foo.top().name(), "TOP");
        assert_eq!(
            foo.lookup("bar").map(|m| m.atoms().to_vec()),
            Some(vec![Atom::Literal("exact match".to_string())])
        );
        Ok(())
    }

    #[test]
    fn test_compile_without_top() {
        let err = compile_source(
            "grammar foo { token bar { 'x' } }",
            &CompileOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CompileError::Syntax(SyntaxError::MissingTop { ref grammar, .. }) if grammar == "foo"
        ));
        assert_eq!(err.to_string(), "Grammar `foo` has no `TOP` entry");
    }

    #[test]
    fn test_unresolved_reference_then_defined() -> CompileResult<()> {
        let options = CompileOptions::default();
        let err = compile_source("grammar g { token TOP { <missing> } }", &options).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Resolution(ResolutionError::ReferenceNotFound { ref entry, ref reference, .. })
                if entry == "TOP" && reference == "missing"
        ));

        let grammars = compile_source(
            "grammar g { token TOP { <missing> } token missing { } }",
            &options,
        )?;
        assert!(grammars["g"].lookup("missing").is_some());
        Ok(())
    }

    #[test]
    fn test_one_bad_grammar_poisons_the_batch() {
        let source = "
            grammar good { token TOP { 'ok' } }
            grammar bad { token TOP { <nowhere> } }
        ";
        let result = compile_source(source, &CompileOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_references_do_not_cross_grammars() {
        let source = "
            grammar a { token TOP { 'a' } token shared { 'x' } }
            grammar b { token TOP { <shared> } }
        ";
        let err = compile_source(source, &CompileOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Resolution(ResolutionError::ReferenceNotFound { ref grammar, .. }) if grammar == "b"
        ));
    }

    #[test]
    fn test_compile_keeps_declaration_order() -> CompileResult<()> {
        let tokens = tokenize("grammar z { rule TOP { } } grammar y { rule TOP { } }")?;
        let grammars = compile(&tokens, &CompileOptions::default())?;
        let names: Vec<&str> = grammars.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["z", "y"]);
        Ok(())
    }

    #[test]
    fn test_literal_policy_applies_to_source() {
        let source = "grammar g { token TOP { 'never closed } }";
        let lenient = compile_source(source, &CompileOptions::default());
        // The open literal swallows both closing braces.
        assert!(matches!(
            lenient,
            Err(CompileError::Syntax(SyntaxError::UnexpectedEof { .. }))
        ));

        let strict = CompileOptions {
            unterminated_literals: LiteralPolicy::Reject,
            ..CompileOptions::default()
        };
        assert!(matches!(
            compile_source(source, &strict),
            Err(CompileError::Syntax(SyntaxError::UnterminatedLiteral { .. }))
        ));
    }
}
