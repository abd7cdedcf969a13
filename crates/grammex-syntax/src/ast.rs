//! Unresolved grammar declarations, as produced by the parser.
//!
//! Everything here borrows from the grammar source. Atom descriptors are
//! still raw text (`<name>`, `'literal'`, or anything else).

use crate::options::DuplicatePolicy;
use crate::{SyntaxError, SyntaxResult};
use indexmap::IndexMap;
use miette::SourceSpan;
use std::fmt;

/// Name of the entry every grammar must define; matching starts there.
pub const TOP: &str = "TOP";

/// Whether an entry was declared with `token` or `rule`.
///
/// Both kinds match the same way today; the tag is kept so they can diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    Token,
    Rule,
}

impl MatcherKind {
    pub fn keyword(self) -> &'static str {
        match self {
            MatcherKind::Token => "token",
            MatcherKind::Rule => "rule",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One raw element of a matcher body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomDecl<'a> {
    pub text: &'a str,
    pub span: SourceSpan,
}

/// `token name { atom* }` or `rule name { atom* }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherDecl<'a> {
    pub kind: MatcherKind,
    pub name: &'a str,
    pub span: SourceSpan,
    pub atoms: Vec<AtomDecl<'a>>,
}

impl<'a> MatcherDecl<'a> {
    /// An unnamed matcher; `span` is the keyword until the label arrives.
    pub fn new(kind: MatcherKind, span: SourceSpan) -> Self {
        Self {
            kind,
            name: "",
            span,
            atoms: Vec::new(),
        }
    }
}

/// `grammar name { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarDecl<'a> {
    pub name: &'a str,
    pub span: SourceSpan,
    pub entries: IndexMap<&'a str, MatcherDecl<'a>>,
}

impl<'a> GrammarDecl<'a> {
    pub fn new(span: SourceSpan) -> Self {
        Self {
            name: "",
            span,
            entries: IndexMap::new(),
        }
    }

    pub fn has_top(&self) -> bool {
        self.entries.contains_key(TOP)
    }

    /// Store a closed matcher, honouring the duplicate-name policy.
    pub fn insert_entry(&mut self, matcher: MatcherDecl<'a>, policy: DuplicatePolicy) -> SyntaxResult<()> {
        if let Some(previous) = self.entries.get(matcher.name) {
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(SyntaxError::DuplicateEntry {
                        grammar: self.name.to_string(),
                        name: matcher.name.to_string(),
                        span: matcher.span,
                        previous_span: previous.span,
                    });
                }
                DuplicatePolicy::LastWins => {
                    log::warn!(
                        "entry `{}` redefined in grammar `{}`; keeping the later definition",
                        matcher.name,
                        self.name
                    );
                }
            }
        }
        self.entries.insert(matcher.name, matcher);
        Ok(())
    }
}
