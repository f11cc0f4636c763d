//! SBML namespace contexts.

mod namespaces;

pub use namespaces::SbmlNamespaces;
