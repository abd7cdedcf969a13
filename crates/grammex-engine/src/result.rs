use std::fmt;

/// A successful match: the consumed slice of the input and the sub-matches
/// that produced it, in atom order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'i> {
    pub(crate) name: String,
    pub(crate) text: &'i str,
    pub(crate) children: Vec<ChildMatch<'i>>,
}

/// One sub-match, tagged with the position of the atom that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildMatch<'i> {
    pub atom: usize,
    pub result: MatchResult<'i>,
}

impl<'i> MatchResult<'i> {
    /// Name of the matcher this result belongs to. Literal sub-matches carry
    /// the name of the matcher whose body holds the literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &'i str {
        self.text
    }

    pub fn children(&self) -> &[ChildMatch<'i>] {
        &self.children
    }

    /// First child named `name`, if any.
    pub fn child(&self, name: &str) -> Option<&MatchResult<'i>> {
        self.children
            .iter()
            .map(|child| &child.result)
            .find(|result| result.name == name)
    }

    pub(crate) fn leaf(name: &str, text: &'i str) -> Self {
        Self {
            name: name.to_string(),
            text,
            children: Vec::new(),
        }
    }
}

/// `name("text")[child child ...]`, on one line.
impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.name, self.text)?;
        if !self.children.is_empty() {
            f.write_str("[")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", child.result)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
