//! Foundation types for SBML namespace handling.
//!
//! This module provides:
//! - [`SbmlVersion`] - The Level/Version key of an SBML release
//! - [`NamespaceEntry`] - One row of the static namespace registry
//! - Lookup functions over the registry ([`sbml_namespace_uri`] and friends)
//!
//! This module has NO dependencies on other sbml modules except the
//! error type in [`crate::xml`].

mod registry;
mod version;

pub use registry::{
    NamespaceEntry, SBML_PREFIX, default_version_for_level, entries, is_sbml_namespace,
    latest_version, lookup, namespace, sbml_namespace_uri, supported_versions, versions_for_uri,
};
pub use version::SbmlVersion;
