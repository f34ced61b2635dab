//! Support status and lifecycle categories
//!
//! Both enums decode unrecognized backend strings to `Unknown` so that a new
//! status value never fails a whole response.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Support status reported for a release or application stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportStatus {
    /// Within its support window
    #[serde(rename = "Supported")]
    Supported,
    /// Retirement date is close
    #[serde(rename = "Near retirement")]
    NearRetirement,
    /// Past its retirement date
    #[serde(rename = "Retired")]
    Retired,
    /// Not released yet
    #[serde(rename = "Upcoming release")]
    UpcomingRelease,
    /// Known to the roadmap but not installed on any system
    #[serde(rename = "Not installed")]
    NotInstalled,
    /// Anything the backend sends that we do not recognize
    #[default]
    #[serde(other, rename = "Unknown")]
    Unknown,
}

impl SupportStatus {
    /// Human-readable label, identical to the wire value
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::NearRetirement => "Near retirement",
            Self::Retired => "Retired",
            Self::UpcomingRelease => "Upcoming release",
            Self::NotInstalled => "Not installed",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for SupportStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle category of a RHEL minor release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecycleType {
    /// Standard full/maintenance support
    #[serde(rename = "mainline")]
    Mainline,
    /// Extended Update Support
    #[serde(rename = "EUS")]
    Eus,
    /// Update Services for SAP Solutions
    #[serde(rename = "E4S")]
    E4s,
    /// Extended Life-cycle Support
    #[serde(rename = "ELS")]
    Els,
    /// Unrecognized category
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl Display for LifecycleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mainline => "mainline",
            Self::Eus => "EUS",
            Self::E4s => "E4S",
            Self::Els => "ELS",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_status() {
        let status: SupportStatus = serde_json::from_str("\"Near retirement\"").unwrap();
        assert_eq!(status, SupportStatus::NearRetirement);
        assert_eq!(status.to_string(), "Near retirement");
    }

    #[test]
    fn unknown_status_does_not_fail() {
        let status: SupportStatus = serde_json::from_str("\"Extended\"").unwrap();
        assert_eq!(status, SupportStatus::Unknown);
    }

    #[test]
    fn lifecycle_type_roundtrip() {
        let kind: LifecycleType = serde_json::from_str("\"E4S\"").unwrap();
        assert_eq!(kind, LifecycleType::E4s);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"E4S\"");

        let kind: LifecycleType = serde_json::from_str("\"AUS\"").unwrap();
        assert_eq!(kind, LifecycleType::Unknown);
    }
}
