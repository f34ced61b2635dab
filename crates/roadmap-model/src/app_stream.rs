//! Application stream lifecycle records

use crate::date;
use crate::record::LifecycleRecord;
use crate::status::SupportStatus;
use crate::version::ReleaseVersion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Lifecycle of one application stream on a RHEL release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStreamLifecycleRecord {
    /// Package or module name
    pub name: String,
    /// Name shown to users, e.g. `Node.js 18`
    #[serde(default)]
    pub display_name: String,
    /// Stream name as published in the application streams life cycle
    #[serde(default)]
    pub application_stream_name: Option<String>,
    /// Stream version, e.g. `18`
    #[serde(default)]
    pub stream: Option<String>,
    /// Owning RHEL major release
    pub os_major: u32,
    /// Owning RHEL minor release (initial release of the stream)
    #[serde(default)]
    pub os_minor: u32,
    /// Start of support
    #[serde(default, deserialize_with = "date::deserialize_opt")]
    pub start_date: Option<NaiveDate>,
    /// End of support
    #[serde(default, deserialize_with = "date::deserialize_opt")]
    pub end_date: Option<NaiveDate>,
    /// Installed system count
    #[serde(default)]
    pub count: u64,
    /// Rolling stream without a fixed retirement date
    #[serde(default)]
    pub rolling: bool,
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

impl AppStreamLifecycleRecord {
    /// Create record with no dates and no systems
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, os_major: u32) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            application_stream_name: None,
            stream: None,
            os_major,
            os_minor: 0,
            start_date: None,
            end_date: None,
            count: 0,
            rolling: false,
            support_status: SupportStatus::default(),
            related: false,
            systems: Vec::new(),
        }
    }

    /// With initial RHEL minor release
    #[must_use]
    pub fn with_os_minor(mut self, os_minor: u32) -> Self {
        self.os_minor = os_minor;
        self
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

    /// Mark as rolling
    #[must_use]
    pub fn rolling(mut self) -> Self {
        self.rolling = true;
        self
    }

    /// Mark as related
    #[must_use]
    pub fn related(mut self) -> Self {
        self.related = true;
        self
    }

    /// Initial release label, e.g. `RHEL 9.2`
    #[must_use]
    pub fn initial_release(&self) -> String {
        format!("RHEL {}.{}", self.os_major, self.os_minor)
    }
}

impl LifecycleRecord for AppStreamLifecycleRecord {
    fn display_name(&self) -> Cow<'_, str> {
        if self.display_name.is_empty() {
            Cow::Borrowed(&self.name)
        } else {
            Cow::Borrowed(&self.display_name)
        }
    }

    #[inline]
    fn release_version(&self) -> ReleaseVersion {
        ReleaseVersion::new(self.os_major, self.os_minor)
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
