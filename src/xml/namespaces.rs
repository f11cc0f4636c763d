//! Ordered set of XML namespace declarations.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;
use tracing::trace;

use super::NamespaceError;

/// Ordered `prefix → URI` declarations, as found on an XML element.
///
/// Each prefix is declared at most once; the empty prefix is the default
/// namespace. Declaration order is preserved and positions are stable
/// until an entry is removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XmlNamespaces {
    by_prefix: IndexMap<SmolStr, SmolStr, FxBuildHasher>,
}

impl XmlNamespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }

    /// URI at `index`.
    pub fn uri(&self, index: usize) -> Result<&str, NamespaceError> {
        self.by_prefix
            .get_index(index)
            .map(|(_, uri)| uri.as_str())
            .ok_or_else(|| NamespaceError::index_out_of_range(index, self.len()))
    }

    /// Prefix at `index`.
    pub fn prefix(&self, index: usize) -> Result<&str, NamespaceError> {
        self.by_prefix
            .get_index(index)
            .map(|(prefix, _)| prefix.as_str())
            .ok_or_else(|| NamespaceError::index_out_of_range(index, self.len()))
    }

    /// Declarations as `(prefix, uri)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_prefix
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }

    /// Declare `prefix` as `uri`.
    ///
    /// Redeclaring an existing prefix replaces its URI and keeps its
    /// position.
    pub fn add(&mut self, uri: impl Into<SmolStr>, prefix: impl Into<SmolStr>) {
        let (uri, prefix) = (uri.into(), prefix.into());
        trace!(%prefix, %uri, "declaring namespace");
        self.by_prefix.insert(prefix, uri);
    }

    /// Remove the declaration at `index`, returning `(prefix, uri)`.
    pub fn remove(&mut self, index: usize) -> Result<(SmolStr, SmolStr), NamespaceError> {
        let len = self.len();
        self.by_prefix
            .shift_remove_index(index)
            .ok_or_else(|| NamespaceError::index_out_of_range(index, len))
    }

    /// Remove the declaration of `prefix`. Returns whether one existed.
    pub fn remove_prefix(&mut self, prefix: &str) -> bool {
        let removed = self.by_prefix.shift_remove(prefix).is_some();
        if removed {
            trace!(prefix, "removed namespace");
        }
        removed
    }

    /// Remove every declaration of `uri`. Returns how many were removed.
    pub fn remove_uri(&mut self, uri: &str) -> usize {
        let before = self.len();
        self.by_prefix.retain(|_, declared| declared.as_str() != uri);
        before - self.len()
    }

    pub fn clear(&mut self) {
        self.by_prefix.clear();
    }

    /// Position of the first declaration of `uri`.
    pub fn index_of_uri(&self, uri: &str) -> Option<usize> {
        self.by_prefix.values().position(|declared| declared.as_str() == uri)
    }

    /// Position of the declaration of `prefix`.
    pub fn index_of_prefix(&self, prefix: &str) -> Option<usize> {
        self.by_prefix.get_index_of(prefix)
    }

    pub fn uri_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.by_prefix.get(prefix).map(SmolStr::as_str)
    }

    /// Prefix of the first declaration of `uri`.
    pub fn prefix_for_uri(&self, uri: &str) -> Option<&str> {
        self.by_prefix
            .iter()
            .find(|(_, declared)| declared.as_str() == uri)
            .map(|(prefix, _)| prefix.as_str())
    }

    pub fn has_uri(&self, uri: &str) -> bool {
        self.index_of_uri(uri).is_some()
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.by_prefix.contains_key(prefix)
    }

    /// Whether `prefix` is declared as exactly `uri`.
    pub fn has_namespace(&self, uri: &str, prefix: &str) -> bool {
        self.uri_for_prefix(prefix) == Some(uri)
    }
}

impl<U, P> FromIterator<(U, P)> for XmlNamespaces
where
    U: Into<SmolStr>,
    P: Into<SmolStr>,
{
    /// Collect `(uri, prefix)` pairs, in the argument order of [`XmlNamespaces::add`].
    fn from_iter<I: IntoIterator<Item = (U, P)>>(iter: I) -> Self {
        let mut namespaces = Self::new();
        for (uri, prefix) in iter {
            namespaces.add(uri, prefix);
        }
        namespaces
    }
}
