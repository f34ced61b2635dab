//! Upcoming roadmap changes

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kind of an upcoming change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum UpcomingType {
    /// New capability
    Addition,
    /// Behavior change
    Change,
    /// Planned removal
    Deprecation,
    /// Improvement of an existing capability
    Enhancement,
    /// Unrecognized type
    #[default]
    #[serde(other)]
    Unknown,
}

impl UpcomingType {
    /// All recognized types, in display order
    pub const ALL: [Self; 4] = [
        Self::Addition,
        Self::Change,
        Self::Deprecation,
        Self::Enhancement,
    ];

    /// Wire label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Change => "Change",
            Self::Deprecation => "Deprecation",
            Self::Enhancement => "Enhancement",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for UpcomingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UpcomingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown change type: '{s}'"))
    }
}

/// Free-form details of an upcoming change
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingDetails {
    /// Short description
    #[serde(default)]
    pub summary: String,
    /// Affected architecture, if specific
    #[serde(default)]
    pub architecture: Option<String>,
    /// Number of systems that may be affected
    #[serde(default)]
    pub potentially_affected_systems: u64,
}

/// A planned change on the RHEL roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingChange {
    /// Name of the change
    pub name: String,
    /// Kind of change
    #[serde(rename = "type", default)]
    pub change_type: UpcomingType,
    /// Target release, e.g. `10.1`
    #[serde(default)]
    pub release: String,
    /// Planned date as published, e.g. `2025-05`
    #[serde(default)]
    pub date: String,
    /// Details
    #[serde(default)]
    pub details: UpcomingDetails,
}

impl UpcomingChange {
    /// Create change with empty details
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        change_type: UpcomingType,
        release: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            change_type,
            release: release.into(),
            date: date.into(),
            details: UpcomingDetails::default(),
        }
    }

    /// With summary text
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.details.summary = summary.into();
        self
    }
}
