//! # Host Versions
//!
//! Version numbers of the host application. Every attribute in the schema
//! tables carries a `[min, max)` window expressed with these values, and the
//! generator emits code for exactly one target version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` host version, ordered lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

pub const V4_2: HostVersion = HostVersion::new(4, 2, 0);
pub const V4_3: HostVersion = HostVersion::new(4, 3, 0);
pub const V4_4: HostVersion = HostVersion::new(4, 4, 0);
pub const V4_5: HostVersion = HostVersion::new(4, 5, 0);
pub const V5_0: HostVersion = HostVersion::new(5, 0, 0);
pub const V5_1: HostVersion = HostVersion::new(5, 1, 0);

/// Oldest host version the schema tables describe.
pub const MIN_SUPPORTED: HostVersion = V4_2;

/// First host version that is no longer supported.
pub const MAX_SUPPORTED: HostVersion = V5_1;

impl HostVersion {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self { major, minor, patch }
    }

    /// Whether the schema tables cover this version.
    pub fn is_supported(self) -> bool {
        self >= MIN_SUPPORTED && self < MAX_SUPPORTED
    }

    /// Python tuple literal, e.g. `(4, 2, 0)`.
    pub fn to_tuple_literal(self) -> String {
        format!("({}, {}, {})", self.major, self.minor, self.patch)
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        MIN_SUPPORTED
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error returned when a version string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid host version `{0}`, expected `major.minor[.patch]`")]
pub struct ParseVersionError(String);

impl FromStr for HostVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.to_string());
        let parts = s
            .trim()
            .split('.')
            .map(|p| p.parse::<u16>().map_err(|_| err()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for HostVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HostVersion> for String {
    fn from(value: HostVersion) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_and_three_components() {
        assert_eq!("4.2".parse::<HostVersion>().unwrap(), V4_2);
        assert_eq!("4.5.3".parse::<HostVersion>().unwrap(), HostVersion::new(4, 5, 3));
        assert!("4".parse::<HostVersion>().is_err());
        assert!("4.x".parse::<HostVersion>().is_err());
        assert!("4.2.0.1".parse::<HostVersion>().is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(HostVersion::new(4, 10, 0) > V4_5);
        assert!(HostVersion::new(4, 5, 1) > V4_5);
        assert!(V5_0 > HostVersion::new(4, 99, 99));
    }

    #[test]
    fn supported_window_is_half_open() {
        assert!(V4_2.is_supported());
        assert!(HostVersion::new(5, 0, 7).is_supported());
        assert!(!V5_1.is_supported());
        assert!(!HostVersion::new(4, 1, 0).is_supported());
    }

    #[test]
    fn serde_uses_dotted_string() {
        let json = serde_json::to_string(&V4_3).unwrap();
        assert_eq!(json, "\"4.3.0\"");
        let back: HostVersion = serde_json::from_str("\"5.0\"").unwrap();
        assert_eq!(back, V5_0);
    }
}
