//! XML namespace declarations.
//!
//! [`XmlNamespaces`] is the ordered prefix/URI set attached to an element;
//! [`NamespaceError`] covers its out-of-range accesses.

mod error;
mod namespaces;

pub use error::NamespaceError;
pub use namespaces::XmlNamespaces;
