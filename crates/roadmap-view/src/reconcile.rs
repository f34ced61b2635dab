//! View-scope and domain reconciliation
//!
//! Picks the working records for a `(scope, domain)` pair and applies the
//! recovery rule that forces the `all` scope when the selection is empty.

use crate::dataset::LifecycleDataset;
use crate::domain::LifecycleDomain;
use crate::scope::ViewScope;
use crate::state::FilterState;
use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord};

/// Records selected by scope and domain, before name/version filtering
#[derive(Debug, Clone)]
pub enum WorkingSet<'a> {
    /// RHEL release records
    Systems(Vec<&'a SystemLifecycleRecord>),
    /// Application stream records of one RHEL major release
    AppStreams(Vec<&'a AppStreamLifecycleRecord>),
}

impl WorkingSet<'_> {
    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Systems(records) => records.len(),
            Self::AppStreams(records) => records.len(),
        }
    }

    /// Whether the selection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select the working records for `scope` and `domain`
#[must_use]
pub fn working_set(dataset: &LifecycleDataset, scope: ViewScope, domain: LifecycleDomain) -> WorkingSet<'_> {
    match domain.os_major() {
        None => WorkingSet::Systems(dataset.systems.scoped(scope).iter().collect()),
        Some(major) => WorkingSet::AppStreams(
            dataset
                .app_streams
                .scoped(scope)
                .iter()
                .filter(|record| record.os_major == major)
                .collect(),
        ),
    }
}

/// Force the `all` scope when the current selection is empty
///
/// Returns the state unchanged when the scope is already `all` or the
/// selection has rows, so repeated application is a no-op.
#[must_use]
pub fn reconcile_scope(state: &FilterState, dataset: &LifecycleDataset) -> FilterState {
    if state.scope == ViewScope::All || !working_set(dataset, state.scope, state.domain).is_empty() {
        return state.clone();
    }

    tracing::debug!(
        scope = %state.scope,
        domain = %state.domain,
        "no records for scope, falling back to all"
    );
    FilterState {
        scope: ViewScope::All,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> LifecycleDataset {
        LifecycleDataset::from_responses(
            vec![SystemLifecycleRecord::new("RHEL", 9, 4)],
            vec![SystemLifecycleRecord::new("RHEL", 9, 4)],
            vec![
                AppStreamLifecycleRecord::new("nodejs", "Node.js 18", 9),
                AppStreamLifecycleRecord::new("nodejs", "Node.js 16", 8),
            ],
            vec![AppStreamLifecycleRecord::new("nodejs", "Node.js 16", 8)],
        )
    }

    #[test]
    fn app_stream_domains_filter_by_major() {
        let data = dataset();
        let set = working_set(&data, ViewScope::All, LifecycleDomain::Rhel8AppStreams);
        match set {
            WorkingSet::AppStreams(records) => {
                assert_eq!(records.len(), 1);
                assert_eq!(records[0].display_name, "Node.js 16");
            }
            WorkingSet::Systems(_) => panic!("expected app streams"),
        }
    }

    #[test]
    fn empty_scope_falls_back_to_all() {
        let data = dataset();
        let state = FilterState::default();
        assert_eq!(state.scope, ViewScope::InstalledOnly);

        let reconciled = reconcile_scope(&state, &data);
        assert_eq!(reconciled.scope, ViewScope::All);
        assert_eq!(reconcile_scope(&reconciled, &data), reconciled);
    }

    #[test]
    fn non_empty_scope_is_kept() {
        let data = dataset();
        let state = FilterState {
            domain: LifecycleDomain::RhelSystems,
            ..FilterState::default()
        };
        assert_eq!(reconcile_scope(&state, &data), state);
    }
}
