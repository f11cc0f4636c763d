//! Namespace interchange for SBML documents.
//!
//! Reads and writes the namespace header of an `<sbml>` root element
//! (see [`read_root`] and [`write_root`]), and provides `serde` support for
//! [`SbmlVersion`](crate::SbmlVersion), [`XmlNamespaces`](crate::XmlNamespaces)
//! and [`SbmlNamespaces`](crate::SbmlNamespaces).
//!
//! ## Usage
//!
//! ```ignore
//! use sbml::interchange::{read_root, write_root};
//!
//! let bytes = std::fs::read("model.xml")?;
//! let sbml = read_root(&bytes)?;
//! assert!(sbml.is_valid_combination());
//! let header = write_root(&sbml)?;
//! ```

mod error;
mod root;

pub use error::InterchangeError;
pub use root::{read_root, write_root};
