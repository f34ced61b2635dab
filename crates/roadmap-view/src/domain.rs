//! Data domains selectable from the lifecycle dropdown

use crate::error::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which data domain the lifecycle view shows
///
/// The three application-stream domains differ only in the RHEL major
/// release they select; `RhelSystems` switches the entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecycleDomain {
    /// RHEL 9 application streams
    #[default]
    DefaultAppStreams,
    /// RHEL 8 application streams
    Rhel8AppStreams,
    /// RHEL 10 application streams
    Rhel10AppStreams,
    /// RHEL releases
    RhelSystems,
}

impl LifecycleDomain {
    /// All domains, in dropdown order
    pub const ALL: [Self; 4] = [
        Self::DefaultAppStreams,
        Self::Rhel8AppStreams,
        Self::Rhel10AppStreams,
        Self::RhelSystems,
    ];

    /// Dropdown label, also used as the query parameter value
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DefaultAppStreams => "RHEL 9 Application Streams",
            Self::Rhel8AppStreams => "RHEL 8 Application Streams",
            Self::Rhel10AppStreams => "RHEL 10 Application Streams",
            Self::RhelSystems => "Red Hat Enterprise Linux",
        }
    }

    /// RHEL major release selected by an application-stream domain
    #[inline]
    #[must_use]
    pub fn os_major(&self) -> Option<u32> {
        match self {
            Self::DefaultAppStreams => Some(9),
            Self::Rhel8AppStreams => Some(8),
            Self::Rhel10AppStreams => Some(10),
            Self::RhelSystems => None,
        }
    }

    /// Whether this domain shows RHEL releases rather than app streams
    #[inline]
    #[must_use]
    pub fn is_systems(&self) -> bool {
        matches!(self, Self::RhelSystems)
    }

    /// Whether switching from `self` to `other` changes entity type
    #[inline]
    #[must_use]
    pub fn crosses_boundary(&self, other: Self) -> bool {
        self.is_systems() != other.is_systems()
    }
}

impl Display for LifecycleDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LifecycleDomain {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.label() == s)
            .ok_or_else(|| ParseValueError::new("lifecycle domain", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrip() {
        for domain in LifecycleDomain::ALL {
            assert_eq!(domain.label().parse::<LifecycleDomain>(), Ok(domain));
        }
    }

    #[test]
    fn boundary_crossing() {
        use LifecycleDomain::*;
        assert!(DefaultAppStreams.crosses_boundary(RhelSystems));
        assert!(RhelSystems.crosses_boundary(Rhel10AppStreams));
        assert!(!Rhel8AppStreams.crosses_boundary(Rhel10AppStreams));
        assert!(!RhelSystems.crosses_boundary(RhelSystems));
    }

    #[test]
    fn app_stream_domains_select_major() {
        assert_eq!(LifecycleDomain::default().os_major(), Some(9));
        assert_eq!(LifecycleDomain::RhelSystems.os_major(), None);
    }
}
