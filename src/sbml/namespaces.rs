//! Level/Version namespace context.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::{self, SbmlVersion};
use crate::xml::XmlNamespaces;

/// The namespaces in force for one SBML Level/Version.
///
/// Built by [`SbmlNamespaces::new`], which never fails: an unknown pair
/// keeps the requested level and version and resolves to an empty
/// namespace set. Callers check [`XmlNamespaces::len`] before indexing.
///
/// ```
/// use sbml::SbmlNamespaces;
///
/// let sbml = SbmlNamespaces::new(2, 2);
/// let ns = sbml.namespaces();
/// assert_eq!(ns.len(), 1);
/// assert_eq!(ns.uri(0).unwrap(), "http://www.sbml.org/sbml/level2/version2");
/// assert_eq!(ns.prefix(0).unwrap(), "sbml");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "repr::SbmlNamespacesRepr", into = "repr::SbmlNamespacesRepr")
)]
pub struct SbmlNamespaces {
    key: SbmlVersion,
    namespaces: XmlNamespaces,
}

impl SbmlNamespaces {
    pub fn new(level: u32, version: u32) -> Self {
        Self::for_version(SbmlVersion::new(level, version))
    }

    /// Resolve the namespaces of `key` from the registry.
    pub fn for_version(key: SbmlVersion) -> Self {
        let mut namespaces = XmlNamespaces::new();
        match base::lookup(key) {
            Some(entry) => namespaces.add(entry.uri, entry.prefix),
            None => debug!(%key, "unknown SBML level/version; namespace set is empty"),
        }
        Self { key, namespaces }
    }

    /// Core namespace URI for a Level/Version pair, without building a
    /// context. Agrees with `SbmlNamespaces::new(level, version).namespaces().uri(0)`.
    pub fn sbml_namespace_uri(level: u32, version: u32) -> Option<&'static str> {
        base::sbml_namespace_uri(level, version)
    }

    /// The level as passed to the constructor.
    pub fn level(&self) -> u32 {
        self.key.level
    }

    /// The version as passed to the constructor.
    pub fn version(&self) -> u32 {
        self.key.version
    }

    pub fn key(&self) -> SbmlVersion {
        self.key
    }

    pub fn namespaces(&self) -> &XmlNamespaces {
        &self.namespaces
    }

    /// Registry URI for this context's Level/Version.
    pub fn sbml_uri(&self) -> Option<&'static str> {
        self.key.namespace_uri()
    }

    pub fn is_valid_combination(&self) -> bool {
        self.key.is_known()
    }

    /// Declare an additional namespace alongside the SBML core one.
    pub fn add_namespace(&mut self, uri: impl Into<SmolStr>, prefix: impl Into<SmolStr>) {
        self.namespaces.add(uri, prefix);
    }

    /// Declare every namespace of `other`, in its order.
    pub fn add_namespaces(&mut self, other: &XmlNamespaces) {
        for (prefix, uri) in other.iter() {
            self.namespaces.add(uri, prefix);
        }
    }

    /// Remove every declaration of `uri`. Returns how many were removed.
    pub fn remove_namespace(&mut self, uri: &str) -> usize {
        let removed = self.namespaces.remove_uri(uri);
        trace!(uri, removed, "removed namespace declarations");
        removed
    }

    /// Declarations other than the registry's own core entry.
    pub fn extra_namespaces(&self) -> XmlNamespaces {
        let core = base::lookup(self.key);
        self.namespaces
            .iter()
            .filter(|&(prefix, uri)| {
                !core.is_some_and(|entry| entry.prefix == prefix && entry.uri == uri)
            })
            .map(|(prefix, uri)| (uri, prefix))
            .collect()
    }
}

impl Default for SbmlNamespaces {
    /// The latest known release.
    fn default() -> Self {
        Self::for_version(base::latest_version())
    }
}

impl From<SbmlVersion> for SbmlNamespaces {
    fn from(key: SbmlVersion) -> Self {
        Self::for_version(key)
    }
}

#[cfg(feature = "interchange")]
mod repr {
    use serde::{Deserialize, Serialize};

    use super::SbmlNamespaces;
    use crate::xml::XmlNamespaces;

    /// Serialized form: the core set is implied by the key and re-resolved
    /// on load; only extra declarations are stored.
    #[derive(Serialize, Deserialize)]
    pub(super) struct SbmlNamespacesRepr {
        level: u32,
        version: u32,
        #[serde(default, skip_serializing_if = "XmlNamespaces::is_empty")]
        namespaces: XmlNamespaces,
    }

    impl From<SbmlNamespacesRepr> for SbmlNamespaces {
        fn from(repr: SbmlNamespacesRepr) -> Self {
            let mut sbml = SbmlNamespaces::new(repr.level, repr.version);
            sbml.add_namespaces(&repr.namespaces);
            sbml
        }
    }

    impl From<SbmlNamespaces> for SbmlNamespacesRepr {
        fn from(sbml: SbmlNamespaces) -> Self {
            Self {
                level: sbml.level(),
                version: sbml.version(),
                namespaces: sbml.extra_namespaces(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::NamespaceError;

    const MATHML: &str = "http://www.w3.org/1998/Math/MathML";

    #[test]
    fn test_unknown_pair_keeps_inputs() {
        let sbml = SbmlNamespaces::new(3, 1);
        assert_eq!(sbml.level(), 3);
        assert_eq!(sbml.version(), 1);
        assert_eq!(sbml.namespaces().len(), 0);
        assert!(!sbml.is_valid_combination());
        assert_eq!(sbml.sbml_uri(), None);
        assert_eq!(
            sbml.namespaces().uri(0),
            Err(NamespaceError::index_out_of_range(0, 0))
        );
    }

    #[test]
    fn test_default_is_latest() {
        let sbml = SbmlNamespaces::default();
        assert_eq!(sbml.key(), SbmlVersion::new(2, 4));
        assert_eq!(sbml.namespaces().len(), 1);
    }

    #[test]
    fn test_add_and_remove_extra_namespace() {
        let mut sbml = SbmlNamespaces::new(2, 3);
        sbml.add_namespace(MATHML, "math");

        assert_eq!(sbml.namespaces().len(), 2);
        assert_eq!(sbml.namespaces().prefix(1).unwrap(), "math");

        let extras = sbml.extra_namespaces();
        assert_eq!(extras.len(), 1);
        assert_eq!(extras.uri(0).unwrap(), MATHML);

        assert_eq!(sbml.remove_namespace(MATHML), 1);
        assert_eq!(sbml.namespaces().len(), 1);
        assert!(sbml.extra_namespaces().is_empty());
    }

    #[test]
    fn test_add_namespaces_merges_in_order() {
        let mut sbml = SbmlNamespaces::new(1, 2);
        let other: XmlNamespaces = [(MATHML, "math"), ("http://www.w3.org/1999/xhtml", "")]
            .into_iter()
            .collect();
        sbml.add_namespaces(&other);

        let prefixes: Vec<_> = sbml.namespaces().iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["sbml", "math", ""]);
    }

    #[test]
    fn test_redeclared_core_prefix_counts_as_extra() {
        let mut sbml = SbmlNamespaces::new(2, 1);
        sbml.add_namespace("http://example.org/not-sbml", "sbml");
        assert_eq!(sbml.namespaces().len(), 1);
        assert_eq!(sbml.extra_namespaces().len(), 1);
    }

    #[cfg(feature = "interchange")]
    #[test]
    fn test_serde_reresolves_core_set() {
        let mut sbml = SbmlNamespaces::new(2, 4);
        sbml.add_namespace(MATHML, "math");

        let json = serde_json::to_string(&sbml).unwrap();
        assert!(json.contains("\"level\":2"));
        assert!(!json.contains("level2/version4"));

        let parsed: SbmlNamespaces = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sbml);

        let bare: SbmlNamespaces = serde_json::from_str(r#"{"level":1,"version":1}"#).unwrap();
        assert_eq!(bare.namespaces().uri(0).unwrap(), "http://www.sbml.org/sbml/level1");
    }
}
