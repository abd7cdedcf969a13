//! Assemble grammars in code instead of parsing grammar source.
//!
//! ```ignore
//! let grammar = GrammarBuilder::new("foo")
//!     .token("TOP", [reference("baz")])
//!     .rule("bar", [".*"])
//!     .rule("baz", [literal("exact match")])
//!     .build()?;
//! ```
//!
//! Atoms use the same descriptor syntax as grammar source and go through
//! the same resolver, so a built grammar behaves exactly like a parsed one.
//! Every name and atom must also be writable as one grammar token, so a
//! built grammar's `Display` output compiles back to the same grammar.

use crate::model::Grammar;
use crate::resolver::resolve_grammar;
use crate::{CompileResult, ResolutionError};
use grammex_syntax::{
    tokenize, AtomDecl, DuplicatePolicy, GrammarDecl, MatcherDecl, MatcherKind, TokenKind,
};
use miette::SourceSpan;

/// Descriptor for a literal atom: `literal("a b")` is `'a b'`.
pub fn literal(text: &str) -> String {
    format!("'{}'", text)
}

/// Descriptor for a reference atom: `reference("bar")` is `<bar>`.
pub fn reference(name: &str) -> String {
    format!("<{}>", name)
}

#[derive(Debug, Clone)]
struct EntrySpec {
    kind: MatcherKind,
    name: String,
    atoms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    name: String,
    entries: Vec<EntrySpec>,
    duplicates: DuplicatePolicy,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// How to treat an entry name added twice. Rejects by default.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn token<I, S>(self, name: impl Into<String>, atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(MatcherKind::Token, name.into(), atoms)
    }

    pub fn rule<I, S>(self, name: impl Into<String>, atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(MatcherKind::Rule, name.into(), atoms)
    }

    fn entry<I, S>(mut self, kind: MatcherKind, name: String, atoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(EntrySpec {
            kind,
            name,
            atoms: atoms.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Resolve the collected entries into a [`Grammar`].
    ///
    /// Errors carry empty spans since there is no source text to point at.
    pub fn build(&self) -> CompileResult<Grammar> {
        let nowhere = SourceSpan::new(0.into(), 0);

        let mut decl = GrammarDecl::new(nowhere);
        decl.name = self.name.as_str();
        self.check_token(&self.name, "grammar name", true)?;

        for entry in &self.entries {
            self.check_token(&entry.name, "entry name", true)?;
            for atom in &entry.atoms {
                self.check_token(atom, "atom", false)?;
            }

            let mut matcher = MatcherDecl::new(entry.kind, nowhere);
            matcher.name = entry.name.as_str();
            matcher.atoms = entry
                .atoms
                .iter()
                .map(|text| AtomDecl {
                    text: text.as_str(),
                    span: nowhere,
                })
                .collect();
            decl.insert_entry(matcher, self.duplicates)?;
        }

        resolve_grammar(&decl)
    }

    /// `text` must lex as exactly one token with no open literal. Labels may
    /// be any token; an atom must not be `}`, which would close its body.
    fn check_token(&self, text: &str, role: &'static str, label: bool) -> CompileResult<()> {
        let tokens = tokenize(text)?;
        let fits = match tokens.as_slice() {
            [token] => {
                token.lexeme == text
                    && !token.is_unterminated_literal()
                    && (label || token.kind != TokenKind::RBrace)
            }
            _ => false,
        };

        if fits {
            Ok(())
        } else {
            Err(ResolutionError::Unrepresentable {
                grammar: self.name.clone(),
                text: text.to_string(),
                role,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Atom, CompileError, ResolutionError};
    use grammex_syntax::SyntaxError;

    #[test]
    fn test_build_matches_parsed_grammar() -> CompileResult<()> {
        let built = GrammarBuilder::new("foo")
            .token("TOP", [reference("baz")])
            .rule("bar", [".*"])
            .rule("baz", [literal("exact match")])
            .build()?;

        let parsed = crate::compile_source(
            "grammar foo { token TOP { <baz> } rule bar { .* } rule baz { 'exact match' } }",
            &Default::default(),
        )?;
        assert_eq!(built, parsed["foo"]);
        assert_eq!(built.lookup("bar").unwrap().atoms(), &[Atom::Pattern(".*".to_string())]);
        Ok(())
    }

    #[test]
    fn test_build_requires_top() {
        let err = GrammarBuilder::new("foo")
            .rule("bar", [literal("x")])
            .build()
            .unwrap_err();
        assert!(matches!(err, CompileError::Syntax(SyntaxError::MissingTop { .. })));
    }

    #[test]
    fn test_build_rejects_unknown_reference() {
        let err = GrammarBuilder::new("foo")
            .token("TOP", [reference("ghost")])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CompileError::Resolution(ResolutionError::ReferenceNotFound { ref reference, .. }) if reference == "ghost"
        ));
    }

    #[test]
    fn test_build_duplicate_entries() -> CompileResult<()> {
        let builder = GrammarBuilder::new("foo")
            .token("TOP", [literal("a")])
            .token("TOP", [literal("b")]);
        assert!(matches!(
            builder.build(),
            Err(CompileError::Syntax(SyntaxError::DuplicateEntry { .. }))
        ));

        let grammar = builder.duplicates(DuplicatePolicy::LastWins).build()?;
        assert_eq!(grammar.top().atoms(), &[Atom::Literal("b".to_string())]);
        Ok(())
    }

    #[test]
    fn test_build_rejects_text_source_cannot_spell() {
        let unrepresentable = |builder: GrammarBuilder| {
            matches!(
                builder.build(),
                Err(CompileError::Resolution(ResolutionError::Unrepresentable { .. }))
            )
        };

        assert!(unrepresentable(GrammarBuilder::new("g").token("TOP", [literal("a'b")])));
        assert!(unrepresentable(GrammarBuilder::new("g").token("TOP", ["a b"])));
        assert!(unrepresentable(GrammarBuilder::new("g").token("TOP", ["}"])));
        assert!(unrepresentable(GrammarBuilder::new("g").token("TOP", [""])));
        assert!(unrepresentable(GrammarBuilder::new("g").token("TOP", [literal("x")]).rule("two words", [literal("x")])));
        assert!(unrepresentable(GrammarBuilder::new("my grammar").token("TOP", [literal("x")])));
        assert!(unrepresentable(GrammarBuilder::new("").token("TOP", [literal("x")])));
    }

    #[test]
    fn test_built_grammar_display_compiles_back() -> CompileResult<()> {
        let built = GrammarBuilder::new("g")
            .token("TOP", [reference("greeting"), literal(" "), "{".to_string()])
            .rule("greeting", [literal("hello world"), literal("")])
            .build()?;

        let reparsed = crate::compile_source(&built.to_string(), &Default::default())?;
        assert_eq!(reparsed["g"], built);
        Ok(())
    }

    #[test]
    fn test_empty_atom_list() -> CompileResult<()> {
        let grammar = GrammarBuilder::new("g").rule("TOP", Vec::<String>::new()).build()?;
        assert!(grammar.top().atoms().is_empty());
        Ok(())
    }
}
