//! View scopes over the cached collections

use crate::error::ParseValueError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which subset of the cached data is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewScope {
    /// Every record the roadmap knows about
    All,
    /// Records installed on at least one system
    #[default]
    InstalledOnly,
    /// Installed records plus related ones
    InstalledAndRelated,
}

impl ViewScope {
    /// All scopes, in selector order
    pub const ALL: [Self; 3] = [Self::All, Self::InstalledOnly, Self::InstalledAndRelated];

    /// Query parameter value
    #[inline]
    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InstalledOnly => "installed-only",
            Self::InstalledAndRelated => "installed-and-related",
        }
    }
}

impl Display for ViewScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for ViewScope {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.as_param() == s)
            .ok_or_else(|| ParseValueError::new("view scope", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_roundtrip() {
        for scope in ViewScope::ALL {
            assert_eq!(scope.as_param().parse::<ViewScope>(), Ok(scope));
        }
    }

    #[test]
    fn rejects_unknown() {
        assert!("installed".parse::<ViewScope>().is_err());
        assert!("ALL".parse::<ViewScope>().is_err());
    }
}
