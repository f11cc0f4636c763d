//! Static Level/Version → namespace table.
//!
//! The table is a `static` slice: it is built at compile time, never
//! mutated, and safe to read from any thread without synchronization.

use super::SbmlVersion;

/// SBML core namespace URIs.
pub mod namespace {
    /// SBML Level 1 (all versions share this URI).
    pub const SBML_L1: &str = "http://www.sbml.org/sbml/level1";
    /// SBML Level 2 Version 1.
    pub const SBML_L2V1: &str = "http://www.sbml.org/sbml/level2";
    /// SBML Level 2 Version 2.
    pub const SBML_L2V2: &str = "http://www.sbml.org/sbml/level2/version2";
    /// SBML Level 2 Version 3.
    pub const SBML_L2V3: &str = "http://www.sbml.org/sbml/level2/version3";
    /// SBML Level 2 Version 4.
    pub const SBML_L2V4: &str = "http://www.sbml.org/sbml/level2/version4";
}

/// Prefix bound to every SBML core namespace.
pub const SBML_PREFIX: &str = "sbml";

/// One row of the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamespaceEntry {
    pub key: SbmlVersion,
    pub uri: &'static str,
    pub prefix: &'static str,
}

const fn entry(level: u32, version: u32, uri: &'static str) -> NamespaceEntry {
    NamespaceEntry {
        key: SbmlVersion::new(level, version),
        uri,
        prefix: SBML_PREFIX,
    }
}

// Sorted by key; `latest_version` relies on it.
static REGISTRY: &[NamespaceEntry] = &[
    entry(1, 1, namespace::SBML_L1),
    entry(1, 2, namespace::SBML_L1),
    entry(2, 1, namespace::SBML_L2V1),
    entry(2, 2, namespace::SBML_L2V2),
    entry(2, 3, namespace::SBML_L2V3),
    entry(2, 4, namespace::SBML_L2V4),
];

/// Find the registry row for a key.
pub fn lookup(key: SbmlVersion) -> Option<&'static NamespaceEntry> {
    REGISTRY.iter().find(|entry| entry.key == key)
}

/// All registry rows, in ascending key order.
pub fn entries() -> &'static [NamespaceEntry] {
    REGISTRY
}

/// Core namespace URI for a Level/Version pair, or `None` when the pair
/// is not a known SBML release.
pub fn sbml_namespace_uri(level: u32, version: u32) -> Option<&'static str> {
    lookup(SbmlVersion::new(level, version)).map(|entry| entry.uri)
}

/// Every known Level/Version pair.
pub fn supported_versions() -> impl Iterator<Item = SbmlVersion> {
    REGISTRY.iter().map(|entry| entry.key)
}

/// Whether `uri` is the core namespace of any known SBML release.
pub fn is_sbml_namespace(uri: &str) -> bool {
    REGISTRY.iter().any(|entry| entry.uri == uri)
}

/// Every known pair whose core namespace is `uri`.
///
/// Level 1 releases share one URI, so this can yield more than one key.
pub fn versions_for_uri(uri: &str) -> impl Iterator<Item = SbmlVersion> + '_ {
    REGISTRY
        .iter()
        .filter(move |entry| entry.uri == uri)
        .map(|entry| entry.key)
}

/// The most recent known release.
pub fn latest_version() -> SbmlVersion {
    // REGISTRY is a non-empty literal.
    REGISTRY[REGISTRY.len() - 1].key
}

/// The most recent known version within `level`.
pub fn default_version_for_level(level: u32) -> Option<SbmlVersion> {
    REGISTRY
        .iter()
        .rev()
        .find(|entry| entry.key.level == level)
        .map(|entry| entry.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted() {
        assert!(REGISTRY.windows(2).all(|w| w[0].key < w[1].key));
    }

    #[test]
    fn test_lookup_is_stable() {
        let first = lookup(SbmlVersion::new(2, 3)).unwrap();
        let second = lookup(SbmlVersion::new(2, 3)).unwrap();
        assert_eq!(first.uri.as_bytes(), second.uri.as_bytes());
        assert_eq!(first.prefix.as_bytes(), second.prefix.as_bytes());
    }

    #[test]
    fn test_every_prefix_is_sbml() {
        assert!(entries().iter().all(|entry| entry.prefix == "sbml"));
    }

    #[test]
    fn test_unknown_pairs() {
        assert_eq!(sbml_namespace_uri(3, 1), None);
        assert_eq!(sbml_namespace_uri(0, 0), None);
        assert_eq!(sbml_namespace_uri(2, 5), None);
        assert_eq!(sbml_namespace_uri(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_versions_for_level1_uri() {
        let keys: Vec<_> = versions_for_uri(namespace::SBML_L1).collect();
        assert_eq!(keys, vec![SbmlVersion::new(1, 1), SbmlVersion::new(1, 2)]);
        assert_eq!(versions_for_uri("http://example.org/other").count(), 0);
    }

    #[test]
    fn test_latest_and_default_versions() {
        assert_eq!(latest_version(), SbmlVersion::new(2, 4));
        assert_eq!(default_version_for_level(1), Some(SbmlVersion::new(1, 2)));
        assert_eq!(default_version_for_level(2), Some(SbmlVersion::new(2, 4)));
        assert_eq!(default_version_for_level(3), None);
    }

    #[test]
    fn test_is_sbml_namespace() {
        assert!(is_sbml_namespace("http://www.sbml.org/sbml/level2/version3"));
        assert!(!is_sbml_namespace("http://www.sbml.org/sbml/level3/version1/core"));
        assert!(!is_sbml_namespace(""));
    }
}
