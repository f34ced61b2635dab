//! Filter state and its reducer
//!
//! Every user interaction is a [`FilterAction`]; [`reduce`] maps
//! `(state, action)` to the next state without touching any data.

use crate::domain::LifecycleDomain;
use crate::scope::ViewScope;
use crate::sort::{SortDirection, SortField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete filter, sort and scope selection of the lifecycle view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Name substring
    pub name: String,
    /// Selected `RHEL {major}` labels; only non-empty for the systems domain
    pub versions: BTreeSet<String>,
    /// Active dropdown domain
    pub domain: LifecycleDomain,
    /// Active view scope
    pub scope: ViewScope,
    /// Active sort field
    pub sort_field: SortField,
    /// Active sort direction
    pub sort_direction: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        let sort_field = SortField::default();
        Self {
            name: String::new(),
            versions: BTreeSet::new(),
            domain: LifecycleDomain::default(),
            scope: ViewScope::default(),
            sort_field,
            sort_direction: sort_field.default_direction(),
        }
    }
}

impl FilterState {
    /// Create default state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, consuming the current state
    #[inline]
    #[must_use]
    pub fn apply(self, action: FilterAction) -> Self {
        reduce(&self, action)
    }
}

/// User interactions with the lifecycle view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the name filter
    SetName(String),
    /// Replace the version selection
    SetVersions(BTreeSet<String>),
    /// Add or remove one version label
    ToggleVersion(String),
    /// Switch dropdown domain
    SetDomain(LifecycleDomain),
    /// Switch view scope
    SetScope(ViewScope),
    /// Column header click: toggle if active, else select with its default
    SortBy(SortField),
    /// Explicit direction override
    SetSortDirection(SortDirection),
    /// Restore the active field's default direction
    ResetSort,
    /// Restore every default
    ClearFilters,
}

/// Compute the state following `action`
///
/// Version selections are ignored outside the systems domain, and a domain
/// switch between systems and application streams clears name and version
/// filters.
#[must_use]
pub fn reduce(state: &FilterState, action: FilterAction) -> FilterState {
    let mut next = state.clone();
    match action {
        FilterAction::SetName(name) => next.name = name,
        FilterAction::SetVersions(versions) => {
            if next.domain.is_systems() {
                next.versions = versions;
            }
        }
        FilterAction::ToggleVersion(label) => {
            if next.domain.is_systems() && !next.versions.remove(&label) {
                next.versions.insert(label);
            }
        }
        FilterAction::SetDomain(domain) => {
            if next.domain.crosses_boundary(domain) {
                next.name.clear();
                next.versions.clear();
            }
            next.domain = domain;
        }
        FilterAction::SetScope(scope) => next.scope = scope,
        FilterAction::SortBy(field) => {
            if next.sort_field == field {
                next.sort_direction = next.sort_direction.toggled();
            } else {
                next.sort_field = field;
                next.sort_direction = field.default_direction();
            }
        }
        FilterAction::SetSortDirection(direction) => next.sort_direction = direction,
        FilterAction::ResetSort => next.sort_direction = next.sort_field.default_direction(),
        FilterAction::ClearFilters => next = FilterState::default(),
    }
    next
}
