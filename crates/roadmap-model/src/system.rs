//! RHEL system lifecycle records

use crate::date;
use crate::record::LifecycleRecord;
use crate::status::{LifecycleType, SupportStatus};
use crate::version::ReleaseVersion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lifecycle of one RHEL minor release
///
/// Immutable once fetched; collections of these are held behind `Arc` and
/// never sorted in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLifecycleRecord {
    /// Product name, usually `RHEL`
    pub name: String,
    /// Major release
    pub major: u32,
    /// Minor release
    pub minor: u32,
    /// Start of support
    #[serde(default, deserialize_with = "date::deserialize_opt")]
    pub start_date: Option<NaiveDate>,
    /// End of support
    #[serde(default, deserialize_with = "date::deserialize_opt")]
    pub end_date: Option<NaiveDate>,
    /// Installed system count
    #[serde(default)]
    pub count: u64,
    /// Lifecycle category
    #[serde(default)]
    pub lifecycle_type: LifecycleType,
    /// Support status
    #[serde(default)]
    pub support_status: SupportStatus,
    /// Related (not installed) record
    #[serde(default)]
    pub related: bool,
    /// Affected system identifiers
    #[serde(default)]
    pub systems: Vec<String>,
}

impl SystemLifecycleRecord {
    /// Create record for a release with no dates and no systems
    #[must_use]
    pub fn new(name: impl Into<String>, major: u32, minor: u32) -> Self {
        Self {
            name: name.into(),
            major,
            minor,
            start_date: None,
            end_date: None,
            count: 0,
            lifecycle_type: LifecycleType::default(),
            support_status: SupportStatus::default(),
            related: false,
            systems: Vec::new(),
        }
    }

    /// With support window
    #[must_use]
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// With affected systems; the count follows the list
    #[must_use]
    pub fn with_systems<I, S>(mut self, systems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.systems = systems.into_iter().map(Into::into).collect();
        self.count = self.systems.len() as u64;
        self
    }

    /// With support status
    #[must_use]
    pub fn with_status(mut self, status: SupportStatus) -> Self {
        self.support_status = status;
        self
    }

    /// With lifecycle category
    #[must_use]
    pub fn with_lifecycle_type(mut self, kind: LifecycleType) -> Self {
        self.lifecycle_type = kind;
        self
    }

    /// Mark as related
    #[must_use]
    pub fn related(mut self) -> Self {
        self.related = true;
        self
    }
}

impl LifecycleRecord for SystemLifecycleRecord {
    fn display_name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}.{}", self.name, self.major, self.minor))
    }

    #[inline]
    fn release_version(&self) -> ReleaseVersion {
        ReleaseVersion::new(self.major, self.minor)
    }

    #[inline]
    fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    #[inline]
    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[inline]
    fn system_count(&self) -> u64 {
        self.count
    }

    #[inline]
    fn support_status(&self) -> SupportStatus {
        self.support_status
    }

    #[inline]
    fn is_related(&self) -> bool {
        self.related
    }

    #[inline]
    fn systems(&self) -> &[String] {
        &self.systems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_backend_payload() {
        let record: SystemLifecycleRecord = serde_json::from_str(
            r#"{"name":"RHEL","major":8,"minor":10,"start_date":"2024-05-22",
                "end_date":"Unknown","count":2,"lifecycle_type":"mainline",
                "support_status":"Supported","display_name":"RHEL 8.10",
                "related":false,"systems":["s1","s2"]}"#,
        )
        .unwrap();

        assert_eq!(
            record,
            SystemLifecycleRecord::new("RHEL", 8, 10)
                .with_dates(NaiveDate::from_ymd_opt(2024, 5, 22), None)
                .with_systems(["s1", "s2"])
                .with_status(SupportStatus::Supported)
                .with_lifecycle_type(LifecycleType::Mainline)
        );
    }

    #[test]
    fn missing_optional_fields_default() {
        let record: SystemLifecycleRecord =
            serde_json::from_str(r#"{"name":"RHEL","major":9,"minor":0}"#).unwrap();
        assert_eq!(record.count, 0);
        assert!(record.systems.is_empty());
        assert_eq!(record.support_status, SupportStatus::Unknown);
        assert_eq!(record.start_date, None);
    }

    #[test]
    fn composed_display_name_and_label() {
        let record = SystemLifecycleRecord::new("RHEL", 9, 4);
        assert_eq!(record.display_name(), "RHEL 9.4");
        assert_eq!(record.version_label(), "RHEL 9");
    }
}
