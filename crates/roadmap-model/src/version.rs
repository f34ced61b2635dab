//! Release versions and RHEL version labels

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// `major.minor` release version with numeric ordering
///
/// Ordering is numeric per component, so `8.10` sorts after `8.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ReleaseVersion {
    /// Major release number
    pub major: u32,
    /// Minor release number
    pub minor: u32,
}

impl ReleaseVersion {
    /// Create new version
    #[inline]
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// `RHEL {major}` label used by the version filter
    #[inline]
    #[must_use]
    pub fn label(&self) -> String {
        version_label(self.major)
    }
}

impl Display for ReleaseVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Label for a RHEL major version, e.g. `RHEL 9`
#[inline]
#[must_use]
pub fn version_label(major: u32) -> String {
    format!("RHEL {major}")
}

/// Parse a `RHEL {major}` label back to its major version
///
/// # Errors
/// Returns [`ModelError::InvalidVersionLabel`] when the label does not have
/// exactly that shape.
pub fn parse_version_label(label: &str) -> Result<u32, ModelError> {
    label
        .strip_prefix("RHEL ")
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| ModelError::InvalidVersionLabel(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ordering() {
        let v8_9 = ReleaseVersion::new(8, 9);
        let v8_10 = ReleaseVersion::new(8, 10);
        let v9_0 = ReleaseVersion::new(9, 0);
        assert!(v8_9 < v8_10);
        assert!(v8_10 < v9_0);
    }

    #[test]
    fn display() {
        assert_eq!(ReleaseVersion::new(10, 1).to_string(), "10.1");
        assert_eq!(ReleaseVersion::new(8, 10).to_string(), "8.10");
    }

    #[test]
    fn labels() {
        assert_eq!(ReleaseVersion::new(8, 6).label(), "RHEL 8");
        assert_eq!(parse_version_label("RHEL 10"), Ok(10));
        assert!(parse_version_label("RHEL").is_err());
        assert!(parse_version_label("RHEL 9.2").is_err());
        assert!(parse_version_label("rhel 9").is_err());
    }
}
