//! The `(level, version)` key identifying an SBML release.

use std::fmt;
use std::str::FromStr;

use crate::xml::NamespaceError;

/// An SBML Level/Version pair.
///
/// Any pair of integers is representable; whether the pair names a real
/// SBML release is answered by [`SbmlVersion::is_known`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct SbmlVersion {
    pub level: u32,
    pub version: u32,
}

impl SbmlVersion {
    pub const fn new(level: u32, version: u32) -> Self {
        Self { level, version }
    }

    /// Whether this pair has an entry in the namespace registry.
    pub fn is_known(self) -> bool {
        super::registry::lookup(self).is_some()
    }

    /// The core namespace URI for this pair, if known.
    pub fn namespace_uri(self) -> Option<&'static str> {
        super::registry::lookup(self).map(|entry| entry.uri)
    }
}

impl From<(u32, u32)> for SbmlVersion {
    fn from((level, version): (u32, u32)) -> Self {
        Self::new(level, version)
    }
}

impl fmt::Display for SbmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}V{}", self.level, self.version)
    }
}

impl FromStr for SbmlVersion {
    type Err = NamespaceError;

    /// Parse the `L2V4` shorthand (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NamespaceError::invalid_version_key(s);

        let rest = s
            .strip_prefix('L')
            .or_else(|| s.strip_prefix('l'))
            .ok_or_else(invalid)?;
        let split = rest.find(['V', 'v']).ok_or_else(invalid)?;
        let (level, version) = (&rest[..split], &rest[split + 1..]);

        let level = level.parse::<u32>().map_err(|_| invalid())?;
        let version = version.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(level, version))
    }
}
