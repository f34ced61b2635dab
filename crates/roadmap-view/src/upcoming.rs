//! Filtering and summaries for upcoming roadmap changes

use crate::sort::natural_cmp;
use roadmap_model::{UpcomingChange, UpcomingType};
use std::collections::{BTreeMap, BTreeSet};

/// Filter over upcoming changes
///
/// Empty sets match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingFilter {
    /// Case-insensitive name substring
    pub name: String,
    /// Accepted change types
    pub types: BTreeSet<UpcomingType>,
    /// Accepted target releases
    pub releases: BTreeSet<String>,
}

impl UpcomingFilter {
    /// Create filter that matches everything
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name substring
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With accepted types
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = UpcomingType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// With accepted releases
    #[must_use]
    pub fn with_releases<I, S>(mut self, releases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.releases = releases.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `change` passes the filter
    #[must_use]
    pub fn matches(&self, change: &UpcomingChange) -> bool {
        (self.name.is_empty() || change.name.to_lowercase().contains(&self.name.to_lowercase()))
            && (self.types.is_empty() || self.types.contains(&change.change_type))
            && (self.releases.is_empty() || self.releases.contains(&change.release))
    }

    /// Matching changes ordered by date, then name
    #[must_use]
    pub fn apply<'a>(&self, changes: &'a [UpcomingChange]) -> Vec<&'a UpcomingChange> {
        let mut kept: Vec<&UpcomingChange> = changes.iter().filter(|c| self.matches(c)).collect();
        kept.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| natural_cmp(&a.name, &b.name)));
        kept
    }
}

/// Count of changes per type, with every recognized type present
#[must_use]
pub fn summarize(changes: &[&UpcomingChange]) -> BTreeMap<UpcomingType, usize> {
    let mut counts: BTreeMap<UpcomingType, usize> =
        UpcomingType::ALL.into_iter().map(|t| (t, 0)).collect();
    for change in changes {
        *counts.entry(change.change_type).or_insert(0) += 1;
    }
    counts
}

/// Distinct target releases, in natural order
#[must_use]
pub fn releases(changes: &[UpcomingChange]) -> Vec<String> {
    let unique: BTreeSet<&str> = changes.iter().map(|c| c.release.as_str()).collect();
    let mut releases: Vec<String> = unique.into_iter().map(str::to_string).collect();
    releases.sort_by(|a, b| natural_cmp(a, b));
    releases
}
