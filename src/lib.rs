//! # sbml-base
//!
//! SBML Level/Version namespace resolution.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → Root element read/write, serde (feature "interchange")
//!   ↓
//! sbml        → SbmlNamespaces context
//!   ↓
//! xml         → XmlNamespaces prefix/URI sets, NamespaceError
//!   ↓
//! base        → SbmlVersion, static namespace registry
//! ```

// ============================================================================
// MODULES (dependency order: base → xml → sbml → interchange)
// ============================================================================

/// Foundation types: SbmlVersion, namespace registry
pub mod base;

/// XML namespace sets
pub mod xml;

/// SBML namespace contexts
pub mod sbml;

/// Root element namespace interchange
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use base::{SbmlVersion, sbml_namespace_uri};
pub use sbml::SbmlNamespaces;
pub use xml::{NamespaceError, XmlNamespaces};
