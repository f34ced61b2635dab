//! Name and version filters

use roadmap_model::LifecycleRecord;
use std::collections::BTreeSet;

/// Case-insensitive substring match on the display name
///
/// An empty needle matches everything.
#[must_use]
pub fn matches_name<R: LifecycleRecord + ?Sized>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .display_name()
            .to_lowercase()
            .contains(&needle.to_lowercase())
}

/// Membership of the record's `RHEL {major}` label in `versions`
///
/// An empty selection matches everything.
#[must_use]
pub fn matches_versions<R: LifecycleRecord + ?Sized>(record: &R, versions: &BTreeSet<String>) -> bool {
    versions.is_empty() || versions.contains(&record.version_label())
}

/// Keep the records passing both filters, preserving order
#[must_use]
pub fn apply_filters<'a, R: LifecycleRecord>(
    records: &[&'a R],
    name: &str,
    versions: &BTreeSet<String>,
) -> Vec<&'a R> {
    records
        .iter()
        .copied()
        .filter(|record| matches_name(*record, name) && matches_versions(*record, versions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord};

    #[test]
    fn name_match_is_case_insensitive() {
        let record = AppStreamLifecycleRecord::new("nodejs", "Node.js 18", 9);
        assert!(matches_name(&record, "node"));
        assert!(matches_name(&record, "JS 1"));
        assert!(matches_name(&record, ""));
        assert!(!matches_name(&record, "python"));
    }

    #[test]
    fn system_name_matches_composed_version() {
        let record = SystemLifecycleRecord::new("RHEL", 9, 2);
        assert!(matches_name(&record, "rhel 9.2"));
        assert!(matches_name(&record, "9.2"));
        assert!(!matches_name(&record, "9.4"));
    }

    #[test]
    fn version_filter_uses_major_label() {
        let record = SystemLifecycleRecord::new("RHEL", 8, 10);
        let selected = BTreeSet::from(["RHEL 8".to_string()]);
        assert!(matches_versions(&record, &selected));
        assert!(matches_versions(&record, &BTreeSet::new()));
        assert!(!matches_versions(&record, &BTreeSet::from(["RHEL 9".to_string()])));
    }

    #[test]
    fn apply_filters_preserves_order() {
        let a = SystemLifecycleRecord::new("RHEL", 9, 4);
        let b = SystemLifecycleRecord::new("RHEL", 8, 10);
        let c = SystemLifecycleRecord::new("RHEL", 9, 0);
        let versions = BTreeSet::from(["RHEL 9".to_string()]);

        let kept = apply_filters(&[&a, &b, &c], "", &versions);
        assert_eq!(kept, vec![&a, &c]);
    }
}
