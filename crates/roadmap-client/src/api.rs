//! Backend API seam
//!
//! [`LifecycleApi`] is the one place the loader touches the network. The
//! HTTP implementation lives in [`crate::http`], the in-memory one in
//! [`crate::snapshot`].

use crate::error::FetchError;
use async_trait::async_trait;
use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord, UpcomingChange};
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

/// Path prefix shared by every endpoint
pub const API_PREFIX: &str = "/api/digital-roadmap/v1";

/// Backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Every RHEL release
    Systems,
    /// RHEL releases on the organization's systems
    RelevantSystems,
    /// Every application stream
    AppStreams,
    /// Application streams on the organization's systems
    RelevantAppStreams,
    /// Planned roadmap changes
    UpcomingChanges,
}

impl Endpoint {
    /// Path below [`API_PREFIX`]
    #[inline]
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Systems => "/lifecycle/rhel",
            Self::RelevantSystems => "/relevant/lifecycle/rhel",
            Self::AppStreams => "/lifecycle/app-streams",
            Self::RelevantAppStreams => "/relevant/lifecycle/app-streams",
            Self::UpcomingChanges => "/upcoming-changes",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{API_PREFIX}{}", self.path())
    }
}

/// Success body of every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub(crate) data: Vec<T>,
}

/// Source of lifecycle and roadmap records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LifecycleApi: Send + Sync {
    /// Every RHEL release
    async fn systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError>;

    /// RHEL releases installed or related on the organization's systems
    async fn relevant_systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError>;

    /// Every application stream
    async fn app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError>;

    /// Application streams installed or related on the organization's systems
    async fn relevant_app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError>;

    /// Planned roadmap changes
    async fn upcoming_changes(&self) -> Result<Vec<UpcomingChange>, FetchError>;
}
