//! Digital Roadmap Records
//!
//! Typed lifecycle and roadmap records as served by the Digital Roadmap
//! backend.
//!
//! # Core Concepts
//!
//! - [`SystemLifecycleRecord`]: one RHEL minor release and the systems running it
//! - [`AppStreamLifecycleRecord`]: one application stream on a RHEL major release
//! - [`LifecycleRecord`]: the shared view over both, used by filters and sorts
//! - [`UpcomingChange`]: a planned addition, change, deprecation or enhancement
//! - [`ReleaseVersion`]: `major.minor` pair with numeric ordering
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_model::{LifecycleRecord, SystemLifecycleRecord};
//!
//! let records: Vec<SystemLifecycleRecord> = serde_json::from_str(body)?;
//! for record in &records {
//!     println!("{} ends {:?}", record.display_name(), record.end_date());
//! }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod app_stream;
pub mod date;
mod error;
mod record;
mod status;
mod system;
mod upcoming;
mod version;

// Re-exports
pub use app_stream::AppStreamLifecycleRecord;
pub use error::ModelError;
pub use record::LifecycleRecord;
pub use status::{LifecycleType, SupportStatus};
pub use system::SystemLifecycleRecord;
pub use upcoming::{UpcomingChange, UpcomingDetails, UpcomingType};
pub use version::{parse_version_label, version_label, ReleaseVersion};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with lifecycle records
    pub use crate::{
        AppStreamLifecycleRecord, LifecycleRecord, ReleaseVersion, SupportStatus,
        SystemLifecycleRecord, UpcomingChange, UpcomingType,
    };
}
