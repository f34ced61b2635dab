//! Lifecycle view composition
//!
//! ```text
//! dataset → scope → domain → name/version filter → sort → rows
//!             ↑______________________________________________|
//!                reconcile_scope (empty selection → all)
//! ```
//!
//! [`LifecycleView::compute`] is a pure function of the dataset and the
//! filter state. Table, chart and CSV output all read the same
//! [`LifecycleRows`].

use crate::dataset::LifecycleDataset;
use crate::filter::apply_filters;
use crate::reconcile::{reconcile_scope, working_set, WorkingSet};
use crate::sort::sort_records;
use crate::state::FilterState;
use roadmap_model::{AppStreamLifecycleRecord, LifecycleRecord, SystemLifecycleRecord};
use std::collections::BTreeSet;

/// Filtered and sorted rows of one data domain
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleRows<'a> {
    /// RHEL release rows
    Systems(Vec<&'a SystemLifecycleRecord>),
    /// Application stream rows
    AppStreams(Vec<&'a AppStreamLifecycleRecord>),
}

impl<'a> LifecycleRows<'a> {
    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Systems(rows) => rows.len(),
            Self::AppStreams(rows) => rows.len(),
        }
    }

    /// Whether no row survived filtering
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows as trait objects, in display order
    #[must_use]
    pub fn records(&self) -> Vec<&'a dyn LifecycleRecord> {
        match self {
            Self::Systems(rows) => rows.iter().map(|r| *r as &dyn LifecycleRecord).collect(),
            Self::AppStreams(rows) => rows.iter().map(|r| *r as &dyn LifecycleRecord).collect(),
        }
    }

    /// Whether the rows are RHEL releases
    #[inline]
    #[must_use]
    pub fn is_systems(&self) -> bool {
        matches!(self, Self::Systems(_))
    }
}

/// Result of running the filter state against the dataset
#[derive(Debug, Clone)]
pub struct LifecycleView<'a> {
    /// State after scope reconciliation; this is what the URL should show
    pub state: FilterState,
    /// Rows to render
    pub rows: LifecycleRows<'a>,
}

impl<'a> LifecycleView<'a> {
    /// Compose the view for `state` over `dataset`
    #[must_use]
    pub fn compute(dataset: &'a LifecycleDataset, state: &FilterState) -> Self {
        let state = reconcile_scope(state, dataset);
        let no_versions = BTreeSet::new();
        let versions = if state.domain.is_systems() {
            &state.versions
        } else {
            &no_versions
        };

        let rows = match working_set(dataset, state.scope, state.domain) {
            WorkingSet::Systems(records) => {
                let kept = apply_filters(&records, &state.name, versions);
                LifecycleRows::Systems(sort_records(&kept, state.sort_field, state.sort_direction))
            }
            WorkingSet::AppStreams(records) => {
                let kept = apply_filters(&records, &state.name, versions);
                LifecycleRows::AppStreams(sort_records(&kept, state.sort_field, state.sort_direction))
            }
        };

        tracing::trace!(rows = rows.len(), scope = %state.scope, domain = %state.domain, "view computed");
        Self { state, rows }
    }

    /// Whether scope reconciliation changed the requested state
    #[inline]
    #[must_use]
    pub fn scope_corrected(&self, requested: &FilterState) -> bool {
        self.state.scope != requested.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifecycleDomain;
    use crate::scope::ViewScope;
    use crate::state::FilterAction;
    use chrono::NaiveDate;

    fn dataset() -> LifecycleDataset {
        let end = |y| NaiveDate::from_ymd_opt(y, 5, 31);
        LifecycleDataset::from_responses(
            vec![
                SystemLifecycleRecord::new("RHEL", 8, 10).with_dates(None, end(2029)),
                SystemLifecycleRecord::new("RHEL", 9, 4).with_dates(None, end(2026)),
                SystemLifecycleRecord::new("RHEL", 8, 6).with_dates(None, end(2024)),
            ],
            vec![SystemLifecycleRecord::new("RHEL", 9, 4).with_dates(None, end(2026))],
            vec![
                AppStreamLifecycleRecord::new("nodejs", "Node.js 22", 9).with_dates(None, end(2027)),
                AppStreamLifecycleRecord::new("php", "PHP 8.2", 9).with_dates(None, end(2025)),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn version_filter_keeps_only_selected_major() {
        let data = dataset();
        let state = FilterState::new()
            .apply(FilterAction::SetDomain(LifecycleDomain::RhelSystems))
            .apply(FilterAction::SetScope(ViewScope::All))
            .apply(FilterAction::ToggleVersion("RHEL 8".to_string()));

        let view = LifecycleView::compute(&data, &state);
        match view.rows {
            LifecycleRows::Systems(rows) => {
                assert_eq!(rows.len(), 2);
                assert!(rows.iter().all(|r| r.major == 8));
                assert_eq!(rows[0].minor, 6);
            }
            LifecycleRows::AppStreams(_) => panic!("expected systems"),
        }
    }

    #[test]
    fn empty_relevant_app_streams_switch_scope() {
        let data = dataset();
        let state = FilterState::new();

        let view = LifecycleView::compute(&data, &state);
        assert_eq!(view.state.scope, ViewScope::All);
        assert!(view.scope_corrected(&state));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn sorted_by_retirement_ascending_by_default() {
        let data = dataset();
        let view = LifecycleView::compute(&data, &FilterState::new());
        let names: Vec<String> = view
            .rows
            .records()
            .iter()
            .map(|r| r.display_name().into_owned())
            .collect();
        assert_eq!(names, ["PHP 8.2", "Node.js 22"]);
    }

    #[test]
    fn name_filter_applies_after_scope() {
        let data = dataset();
        let state = FilterState::new()
            .apply(FilterAction::SetDomain(LifecycleDomain::RhelSystems))
            .apply(FilterAction::SetName("9.".to_string()));

        let view = LifecycleView::compute(&data, &state);
        assert_eq!(view.state.scope, ViewScope::InstalledOnly);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn stale_versions_ignored_for_app_stream_domain() {
        let data = dataset();
        let mut state = FilterState::new();
        state.versions.insert("RHEL 8".to_string());

        let view = LifecycleView::compute(&data, &state);
        assert_eq!(view.rows.len(), 2);
    }
}
