//! Element-type catalog.

use std::collections::HashSet;

/// Set of element-type identifiers known to the loader.
///
/// Grows by union as type files are read and never shrinks during loading.
/// Move energy costs are validated against this catalog, so the type files
/// must be read before any move file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    types: HashSet<String>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one identifier; returns false if it was already present.
    pub fn insert(&mut self, type_name: impl Into<String>) -> bool {
        self.types.insert(type_name.into())
    }

    /// Whether `type_name` is a known element type.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Union every trimmed line of a types file into the catalog.
    ///
    /// Blank lines contribute the empty string, exactly as trimming produces
    /// it; the set keeps at most one copy.
    pub(crate) fn extend_from_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            self.insert(line.trim());
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().map(Into::into).collect(),
        }
    }
}
