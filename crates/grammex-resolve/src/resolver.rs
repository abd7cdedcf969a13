//! Turns raw atom descriptors into [`Atom`]s.
//!
//! Resolution runs per grammar in two passes: every entry gets a
//! [`MatcherId`] first, then every atom is classified and references are
//! looked up in that index. Allocating ids up front is what lets an entry
//! refer to one declared after it, or to itself.

use crate::model::{Atom, Grammar, Matcher, MatcherId};
use crate::{CompileResult, ResolutionError, ResolveResult};
use grammex_syntax::{AtomDecl, GrammarDecl, SyntaxError, TOP};
use indexmap::IndexMap;

/// What a descriptor looks like, before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor<'a> {
    /// `<name>`, carrying `name`.
    Reference(&'a str),
    /// `'text'`, carrying `text`.
    Literal(&'a str),
    /// Anything else, verbatim.
    Pattern(&'a str),
}

/// Classify a descriptor by its delimiters.
///
/// A lone `<` or `'` is too short to be delimited and counts as a pattern.
pub fn classify(descriptor: &str) -> Descriptor<'_> {
    if descriptor.len() >= 2 {
        if let Some(name) = descriptor.strip_prefix('<').and_then(|d| d.strip_suffix('>')) {
            return Descriptor::Reference(name);
        }
        if let Some(text) = descriptor.strip_prefix('\'').and_then(|d| d.strip_suffix('\'')) {
            return Descriptor::Literal(text);
        }
    }
    Descriptor::Pattern(descriptor)
}

/// Resolves descriptors against one grammar's entries.
pub struct Resolver<'g> {
    grammar: &'g str,
    index: &'g IndexMap<String, MatcherId>,
}

impl<'g> Resolver<'g> {
    pub fn new(grammar: &'g str, index: &'g IndexMap<String, MatcherId>) -> Self {
        Self { grammar, index }
    }

    /// Resolve one atom of the entry named `entry`.
    pub fn resolve_atom(&self, entry: &str, atom: &AtomDecl<'_>) -> ResolveResult<Atom> {
        match classify(atom.text) {
            Descriptor::Reference(name) => match self.index.get(name) {
                Some(id) => Ok(Atom::Reference(*id)),
                None => Err(ResolutionError::ReferenceNotFound {
                    grammar: self.grammar.to_string(),
                    entry: entry.to_string(),
                    reference: name.to_string(),
                    span: atom.span,
                }),
            },
            Descriptor::Literal(text) => Ok(Atom::Literal(text.to_string())),
            Descriptor::Pattern(raw) => {
                log::debug!(
                    "entry `{}` of grammar `{}` keeps unsupported pattern `{}`; it will never match",
                    entry,
                    self.grammar,
                    raw
                );
                Ok(Atom::Pattern(raw.to_string()))
            }
        }
    }
}

/// Resolve every entry of a grammar declaration into a [`Grammar`].
///
/// Fails with `MissingTop` if the declaration has no `TOP` entry, or with
/// the first unresolved reference in declaration order.
pub fn resolve_grammar(decl: &GrammarDecl<'_>) -> CompileResult<Grammar> {
    let index: IndexMap<String, MatcherId> = decl
        .entries
        .keys()
        .enumerate()
        .map(|(i, name)| (name.to_string(), MatcherId::new(i)))
        .collect();

    let top = index.get(TOP).copied().ok_or_else(|| SyntaxError::MissingTop {
        grammar: decl.name.to_string(),
        span: decl.span,
    })?;

    let resolver = Resolver::new(decl.name, &index);
    let mut matchers = Vec::with_capacity(decl.entries.len());

    for entry in decl.entries.values() {
        let atoms = entry
            .atoms
            .iter()
            .map(|atom| resolver.resolve_atom(entry.name, atom))
            .collect::<ResolveResult<Vec<_>>>()?;

        matchers.push(Matcher {
            name: entry.name.to_string(),
            kind: entry.kind,
            atoms,
        });
    }

    Ok(Grammar {
        name: decl.name.to_string(),
        matchers,
        index,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompileError;
    use grammex_syntax::{tokenize, CompileOptions, MatcherKind, NoopCompileObserver};
    use miette::SourceSpan;

    fn atom(text: &str) -> AtomDecl<'_> {
        AtomDecl {
            text,
            span: SourceSpan::new(0.into(), text.len()),
        }
    }

    fn decls(source: &str) -> grammex_syntax::parser::GrammarDecls<'_> {
        let tokens = tokenize(source).expect("tokenize");
        grammex_syntax::parse_grammars(&tokens, &CompileOptions::default(), &mut NoopCompileObserver)
            .expect("parse")
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("<bar>"), Descriptor::Reference("bar"));
        assert_eq!(classify("'exact match'"), Descriptor::Literal("exact match"));
        assert_eq!(classify("''"), Descriptor::Literal(""));
        assert_eq!(classify("<>"), Descriptor::Reference(""));
        assert_eq!(classify(".*"), Descriptor::Pattern(".*"));
        assert_eq!(classify("'"), Descriptor::Pattern("'"));
        assert_eq!(classify("<"), Descriptor::Pattern("<"));
        assert_eq!(classify("<bar"), Descriptor::Pattern("<bar"));
        assert_eq!(classify("'open"), Descriptor::Pattern("'open"));
    }

    #[test]
    fn test_resolve_atom_forms() -> ResolveResult<()> {
        let mut index = IndexMap::new();
        index.insert("bar".to_string(), MatcherId::new(1));
        let resolver = Resolver::new("g", &index);

        assert_eq!(resolver.resolve_atom("TOP", &atom("<bar>"))?, Atom::Reference(MatcherId::new(1)));
        assert_eq!(resolver.resolve_atom("TOP", &atom("'a b'"))?, Atom::Literal("a b".to_string()));
        assert_eq!(resolver.resolve_atom("TOP", &atom(".*"))?, Atom::Pattern(".*".to_string()));
        Ok(())
    }

    #[test]
    fn test_unknown_reference_names_entry() {
        let index = IndexMap::new();
        let resolver = Resolver::new("g", &index);
        let err = resolver.resolve_atom("TOP", &atom("<missing>")).unwrap_err();
        assert_eq!(
            err,
            ResolutionError::ReferenceNotFound {
                grammar: "g".to_string(),
                entry: "TOP".to_string(),
                reference: "missing".to_string(),
                span: SourceSpan::new(0.into(), 9),
            }
        );
    }

    #[test]
    fn test_forward_and_self_references() -> CompileResult<()> {
        let decls = decls("grammar g { token TOP { <later> } rule later { 'x' <later> <TOP> } }");
        let grammar = resolve_grammar(&decls["g"])?;

        let top = grammar.top();
        assert_eq!(top.name(), "TOP");
        assert_eq!(top.atoms(), &[Atom::Reference(grammar.id_of("later").unwrap())]);

        let later = grammar.lookup("later").unwrap();
        assert_eq!(later.kind(), MatcherKind::Rule);
        assert_eq!(
            later.atoms(),
            &[
                Atom::Literal("x".to_string()),
                Atom::Reference(grammar.id_of("later").unwrap()),
                Atom::Reference(grammar.top_id()),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_top_from_handmade_decl() {
        let mut decl = GrammarDecl::new(SourceSpan::new(0.into(), 0));
        decl.name = "g";
        let err = resolve_grammar(&decl).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Syntax(SyntaxError::MissingTop { ref grammar, .. }) if grammar == "g"
        ));
    }
}
