//! Parent → children mapping

use indexmap::IndexMap;

use super::catalog::FilterEnum;

/// Which child values belong to which parent value.
///
/// Both levels keep insertion order. Display order is decided separately
/// by [`super::sort::ordered`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: IndexMap<String, Vec<String>>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the children of `parent`
    pub fn with<I, S>(mut self, parent: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(parent, children);
        self
    }

    pub fn insert<I, S>(&mut self, parent: impl Into<String>, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(parent.into(), children.into_iter().map(Into::into).collect());
    }

    /// Build from a table of closed enums, checked at compile time
    pub fn typed<P: FilterEnum, C: FilterEnum>(table: &[(P, &[C])]) -> Self {
        let mut mapping = Self::new();
        for (parent, children) in table {
            mapping.insert(parent.value(), children.iter().map(|c| c.value()));
        }
        mapping
    }

    /// Children of `parent`, `None` when the parent is not mapped
    pub fn children(&self, parent: &str) -> Option<&[String]> {
        self.entries.get(parent).map(Vec::as_slice)
    }

    pub fn contains_parent(&self, parent: &str) -> bool {
        self.entries.contains_key(parent)
    }

    /// Parent values in insertion order
    pub fn parents(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, C, I> FromIterator<(P, I)> for Mapping
where
    P: Into<String>,
    I: IntoIterator<Item = C>,
    C: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (parent, children) in iter {
            mapping.insert(parent, children);
        }
        mapping
    }
}
