use grammex_syntax::MatcherKind;
use indexmap::IndexMap;
use std::fmt;

/// Stable index of a matcher inside its grammar's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatcherId(u32);

impl MatcherId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved element of a matcher body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Text that must appear verbatim, quotes already stripped.
    Literal(String),
    /// Another entry of the same grammar. Does not own it; cycles are fine.
    Reference(MatcherId),
    /// A bare descriptor such as `.*`. Kept for display, never matches.
    Pattern(String),
}

/// One named `token` or `rule` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub(crate) name: String,
    pub(crate) kind: MatcherKind,
    pub(crate) atoms: Vec<Atom>,
}

impl Matcher {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MatcherKind {
        self.kind
    }

    /// The atoms, matched one after another with no gaps.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

/// A compiled grammar: the sole owner of its matchers.
///
/// Immutable once built; share it freely between threads for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub(crate) name: String,
    pub(crate) matchers: Vec<Matcher>,
    pub(crate) index: IndexMap<String, MatcherId>,
    pub(crate) top: MatcherId,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `TOP` entry, where matching starts.
    pub fn top(&self) -> &Matcher {
        self.matcher(self.top)
    }

    pub fn top_id(&self) -> MatcherId {
        self.top
    }

    /// Look up a matcher by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different grammar and is out of range.
    pub fn matcher(&self, id: MatcherId) -> &Matcher {
        &self.matchers[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<&Matcher> {
        self.id_of(name).map(|id| self.matcher(id))
    }

    pub fn id_of(&self, name: &str) -> Option<MatcherId> {
        self.index.get(name).copied()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Matcher> + '_ {
        self.matchers.iter()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

/// Renders the grammar back in the grammar-description language.
impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "grammar {} {{", self.name)?;
        for matcher in &self.matchers {
            write!(f, "  {} {} {{", matcher.kind, matcher.name)?;
            for atom in &matcher.atoms {
                match atom {
                    Atom::Literal(text) => write!(f, " '{}'", text)?,
                    Atom::Reference(id) => write!(f, " <{}>", self.matcher(*id).name)?,
                    Atom::Pattern(raw) => write!(f, " {}", raw)?,
                }
            }
            writeln!(f, " }}")?;
        }
        write!(f, "}}")
    }
}
