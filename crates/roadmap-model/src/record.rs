//! Shared view over system and application-stream records
//!
//! Filters, sorts and exports operate on [`LifecycleRecord`] so a single
//! implementation serves both data domains.

use crate::status::SupportStatus;
use crate::version::ReleaseVersion;
use chrono::NaiveDate;
use std::borrow::Cow;

/// Common accessors for lifecycle records
pub trait LifecycleRecord: std::fmt::Debug + Send + Sync {
    /// Name shown to users and matched by the name filter
    fn display_name(&self) -> Cow<'_, str>;

    /// Release the record belongs to
    fn release_version(&self) -> ReleaseVersion;

    /// Start of support
    fn start_date(&self) -> Option<NaiveDate>;

    /// End of support
    fn end_date(&self) -> Option<NaiveDate>;

    /// Number of installed systems
    fn system_count(&self) -> u64;

    /// Reported support status
    fn support_status(&self) -> SupportStatus;

    /// Whether the record was returned as related rather than installed
    fn is_related(&self) -> bool;

    /// Identifiers of affected systems
    fn systems(&self) -> &[String];

    /// `RHEL {major}` label of the owning release
    #[inline]
    fn version_label(&self) -> String {
        self.release_version().label()
    }
}
