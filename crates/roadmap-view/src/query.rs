//! URL query synchronization
//!
//! Two-way binding between [`FilterState`] and the query-string parameters
//! `name`, `lifecycleDropdown`, `chartSortBy`, `chartOrder`, `viewFilter` and
//! `versions`.
//!
//! Parsing never fails: a value that does not name a known option is dropped
//! and the default is kept. Serializing replaces our parameters and leaves
//! any others in place.

use crate::domain::LifecycleDomain;
use crate::scope::ViewScope;
use crate::sort::{natural_cmp, SortDirection, SortField};
use crate::state::FilterState;
use roadmap_model::parse_version_label;
use std::collections::BTreeSet;
use url::form_urlencoded;
use url::Url;

/// Name substring parameter
pub const PARAM_NAME: &str = "name";
/// Dropdown domain parameter
pub const PARAM_DOMAIN: &str = "lifecycleDropdown";
/// Sort field parameter
pub const PARAM_SORT_BY: &str = "chartSortBy";
/// Sort direction parameter
pub const PARAM_ORDER: &str = "chartOrder";
/// View scope parameter
pub const PARAM_SCOPE: &str = "viewFilter";
/// Comma-separated version labels parameter
pub const PARAM_VERSIONS: &str = "versions";

/// Every parameter owned by the lifecycle view
pub const PARAMS: [&str; 6] = [
    PARAM_NAME,
    PARAM_DOMAIN,
    PARAM_SORT_BY,
    PARAM_ORDER,
    PARAM_SCOPE,
    PARAM_VERSIONS,
];

/// Option sets used to validate parsed values
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    known_versions: Option<BTreeSet<String>>,
}

impl QueryOptions {
    /// Accept any well-formed `RHEL {major}` label
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept only the given version labels
    #[must_use]
    pub fn with_known_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_versions = Some(versions.into_iter().map(Into::into).collect());
        self
    }

    fn accepts_version(&self, label: &str) -> bool {
        parse_version_label(label).is_ok()
            && self
                .known_versions
                .as_ref()
                .map_or(true, |known| known.contains(label))
    }
}

impl FilterState {
    /// Parse state from a query string, with or without the leading `?`
    #[must_use]
    pub fn from_query(query: &str, options: &QueryOptions) -> Self {
        let mut raw = RawParams::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                PARAM_NAME => &mut raw.name,
                PARAM_DOMAIN => &mut raw.domain,
                PARAM_SORT_BY => &mut raw.sort_by,
                PARAM_ORDER => &mut raw.order,
                PARAM_SCOPE => &mut raw.scope,
                PARAM_VERSIONS => &mut raw.versions,
                _ => continue,
            };
            *slot = Some(value.into_owned());
        }
        raw.into_state(options)
    }

    /// Parse state from a URL's query
    #[must_use]
    pub fn from_url(url: &Url, options: &QueryOptions) -> Self {
        Self::from_query(url.query().unwrap_or_default(), options)
    }

    /// Parameters describing this state, in a stable order
    ///
    /// Empty name and version selections are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(PARAMS.len());
        if !self.name.is_empty() {
            pairs.push((PARAM_NAME, self.name.clone()));
        }
        pairs.push((PARAM_DOMAIN, self.domain.label().to_string()));
        pairs.push((PARAM_SORT_BY, self.sort_field.label().to_string()));
        pairs.push((PARAM_ORDER, self.sort_direction.as_param().to_string()));
        pairs.push((PARAM_SCOPE, self.scope.as_param().to_string()));
        if !self.versions.is_empty() {
            let mut versions: Vec<&str> = self.versions.iter().map(String::as_str).collect();
            versions.sort_by(|a, b| natural_cmp(a, b));
            pairs.push((PARAM_VERSIONS, versions.join(",")));
        }
        pairs
    }

    /// Encoded query string without the leading `?`
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// Write `state` into `url`, replacing any previous lifecycle parameters
pub fn sync_url(url: &mut Url, state: &FilterState) {
    let foreign: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(foreign)
        .extend_pairs(state.query_pairs());
}

#[derive(Debug, Default)]
struct RawParams {
    name: Option<String>,
    domain: Option<String>,
    sort_by: Option<String>,
    order: Option<String>,
    scope: Option<String>,
    versions: Option<String>,
}

impl RawParams {
    fn into_state(self, options: &QueryOptions) -> FilterState {
        let mut state = FilterState::default();

        if let Some(domain) = parse_or_drop::<LifecycleDomain>(PARAM_DOMAIN, self.domain) {
            state.domain = domain;
        }
        if let Some(name) = self.name {
            state.name = name;
        }
        if let Some(scope) = parse_or_drop::<ViewScope>(PARAM_SCOPE, self.scope) {
            state.scope = scope;
        }
        if let Some(field) = parse_or_drop::<SortField>(PARAM_SORT_BY, self.sort_by) {
            state.sort_field = field;
            state.sort_direction = field.default_direction();
        }
        if let Some(direction) = parse_or_drop::<SortDirection>(PARAM_ORDER, self.order) {
            state.sort_direction = direction;
        }
        if let Some(raw) = self.versions.filter(|_| state.domain.is_systems()) {
            state.versions = raw
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .filter(|label| {
                    let ok = options.accepts_version(label);
                    if !ok {
                        tracing::debug!(param = PARAM_VERSIONS, value = %label, "dropping unknown version");
                    }
                    ok
                })
                .map(str::to_string)
                .collect();
        }

        state
    }
}

fn parse_or_drop<T: std::str::FromStr>(param: &'static str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(param, value = %raw, "dropping invalid query parameter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_yields_defaults() {
        assert_eq!(FilterState::from_query("", &QueryOptions::new()), FilterState::default());
        assert_eq!(FilterState::from_query("?", &QueryOptions::new()), FilterState::default());
    }

    #[test]
    fn parses_every_parameter() {
        let query = "name=9.&lifecycleDropdown=Red+Hat+Enterprise+Linux&chartSortBy=Systems\
                     &chartOrder=asc&viewFilter=installed-and-related&versions=RHEL+8%2CRHEL+9";
        let state = FilterState::from_query(query, &QueryOptions::new());

        assert_eq!(state.name, "9.");
        assert_eq!(state.domain, LifecycleDomain::RhelSystems);
        assert_eq!(state.sort_field, SortField::Systems);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert_eq!(state.scope, ViewScope::InstalledAndRelated);
        assert_eq!(
            state.versions,
            BTreeSet::from(["RHEL 8".to_string(), "RHEL 9".to_string()])
        );
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let query = "lifecycleDropdown=CentOS&chartSortBy=Popularity&chartOrder=up&viewFilter=mine";
        assert_eq!(
            FilterState::from_query(query, &QueryOptions::new()),
            FilterState::default()
        );
    }

    #[test]
    fn sort_field_without_order_uses_field_default() {
        let state = FilterState::from_query("chartSortBy=Release+date", &QueryOptions::new());
        assert_eq!(state.sort_field, SortField::ReleaseDate);
        assert_eq!(state.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn versions_validated_against_known_set() {
        let options = QueryOptions::new().with_known_versions(["RHEL 8", "RHEL 9"]);
        let query = "lifecycleDropdown=Red+Hat+Enterprise+Linux&versions=RHEL+8,RHEL+7,bogus";
        let state = FilterState::from_query(query, &options);
        assert_eq!(state.versions, BTreeSet::from(["RHEL 8".to_string()]));
    }

    #[test]
    fn versions_dropped_outside_systems_domain() {
        let state = FilterState::from_query("versions=RHEL+8", &QueryOptions::new());
        assert!(state.versions.is_empty());
    }

    #[test]
    fn serializes_in_stable_order() {
        let mut state = FilterState {
            domain: LifecycleDomain::RhelSystems,
            ..FilterState::default()
        };
        state.versions.insert("RHEL 10".to_string());
        state.versions.insert("RHEL 9".to_string());

        assert_eq!(
            state.to_query(),
            "lifecycleDropdown=Red+Hat+Enterprise+Linux&chartSortBy=Retirement+date\
             &chartOrder=asc&viewFilter=installed-only&versions=RHEL+9%2CRHEL+10"
        );
    }

    #[test]
    fn sync_replaces_own_params_and_keeps_others() {
        let mut url = Url::parse(
            "https://console.example.com/insights/roadmap/lifecycle?tab=lifecycle&name=old&chartOrder=desc",
        )
        .unwrap();
        let state = FilterState {
            name: "python".to_string(),
            ..FilterState::default()
        };

        sync_url(&mut url, &state);

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("tab".to_string(), "lifecycle".to_string()));
        assert_eq!(pairs.iter().filter(|(k, _)| k == PARAM_NAME).count(), 1);
        assert_eq!(FilterState::from_url(&url, &QueryOptions::new()), state);
    }
}
