//! Cached lifecycle collections
//!
//! The four backend responses (all/relevant × systems/app streams) are
//! normalized once into three scoped variants per entity type and then only
//! ever read.

use crate::scope::ViewScope;
use crate::sort::natural_cmp;
use roadmap_model::{AppStreamLifecycleRecord, LifecycleRecord, SystemLifecycleRecord};
use std::collections::BTreeSet;
use std::sync::Arc;

/// One entity type split by view scope
#[derive(Debug, Clone)]
pub struct ScopedCollection<T> {
    all: Arc<[T]>,
    installed: Arc<[T]>,
    related: Arc<[T]>,
}

impl<T: LifecycleRecord + Clone> ScopedCollection<T> {
    /// Build from the "all" and "relevant" responses
    ///
    /// The installed variant is the relevant response without records
    /// flagged as related.
    #[must_use]
    pub fn from_responses(all: Vec<T>, relevant: Vec<T>) -> Self {
        let installed: Vec<T> = relevant.iter().filter(|r| !r.is_related()).cloned().collect();
        Self {
            all: all.into(),
            installed: installed.into(),
            related: relevant.into(),
        }
    }

    /// Records visible under `scope`
    #[inline]
    #[must_use]
    pub fn scoped(&self, scope: ViewScope) -> &[T] {
        match scope {
            ViewScope::All => &*self.all,
            ViewScope::InstalledOnly => &*self.installed,
            ViewScope::InstalledAndRelated => &*self.related,
        }
    }
}

impl<T> Default for ScopedCollection<T> {
    fn default() -> Self {
        Self {
            all: Arc::from(Vec::new()),
            installed: Arc::from(Vec::new()),
            related: Arc::from(Vec::new()),
        }
    }
}

/// Everything the lifecycle view reads from
#[derive(Debug, Clone, Default)]
pub struct LifecycleDataset {
    /// RHEL release records
    pub systems: ScopedCollection<SystemLifecycleRecord>,
    /// Application stream records
    pub app_streams: ScopedCollection<AppStreamLifecycleRecord>,
}

impl LifecycleDataset {
    /// Build from the four backend responses
    #[must_use]
    pub fn from_responses(
        all_systems: Vec<SystemLifecycleRecord>,
        relevant_systems: Vec<SystemLifecycleRecord>,
        all_app_streams: Vec<AppStreamLifecycleRecord>,
        relevant_app_streams: Vec<AppStreamLifecycleRecord>,
    ) -> Self {
        Self {
            systems: ScopedCollection::from_responses(all_systems, relevant_systems),
            app_streams: ScopedCollection::from_responses(all_app_streams, relevant_app_streams),
        }
    }

    /// `RHEL {major}` labels present in the data, in natural order
    ///
    /// This is the option set the version filter and URL parsing accept.
    #[must_use]
    pub fn known_versions(&self) -> Vec<String> {
        let labels: BTreeSet<String> = self
            .systems
            .scoped(ViewScope::All)
            .iter()
            .chain(self.systems.scoped(ViewScope::InstalledAndRelated))
            .map(|record| record.version_label())
            .collect();
        let mut labels: Vec<String> = labels.into_iter().collect();
        labels.sort_by(|a, b| natural_cmp(a, b));
        labels
    }

    /// Total record count across the "all" variants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.scoped(ViewScope::All).len() + self.app_streams.scoped(ViewScope::All).len()
    }

    /// Whether no records were fetched at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &str, major: u32) -> AppStreamLifecycleRecord {
        AppStreamLifecycleRecord::new(name, name, major)
    }

    #[test]
    fn installed_excludes_related() {
        let collection = ScopedCollection::from_responses(
            vec![app("a", 9), app("b", 9), app("c", 9)],
            vec![app("a", 9), app("b", 9).related()],
        );

        assert_eq!(collection.scoped(ViewScope::All).len(), 3);
        assert_eq!(collection.scoped(ViewScope::InstalledAndRelated).len(), 2);

        let installed = collection.scoped(ViewScope::InstalledOnly);
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].name, "a");
    }

    #[test]
    fn known_versions_in_natural_order() {
        let dataset = LifecycleDataset::from_responses(
            vec![
                SystemLifecycleRecord::new("RHEL", 10, 0),
                SystemLifecycleRecord::new("RHEL", 8, 10),
                SystemLifecycleRecord::new("RHEL", 9, 4),
                SystemLifecycleRecord::new("RHEL", 8, 6),
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(dataset.known_versions(), ["RHEL 8", "RHEL 9", "RHEL 10"]);
    }

    #[test]
    fn empty_dataset() {
        let dataset = LifecycleDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.known_versions().is_empty());
    }
}
