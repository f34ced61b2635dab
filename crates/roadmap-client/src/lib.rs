//! Digital Roadmap Client
//!
//! Loads lifecycle and roadmap data from the Digital Roadmap backend.
//!
//! # Core Operations
//!
//! - **Fetch**: [`LifecycleApi`] over HTTP ([`HttpLifecycleApi`]) or a saved
//!   snapshot ([`StaticLifecycleApi`])
//! - **Load**: [`LifecycleLoader`] runs the four lifecycle requests jointly
//!   and caches the resulting dataset with a TTL
//! - **Fail**: [`FetchError`] maps onto a [`FailureScreen`] (generic, locked
//!   or timeout)
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_client::{ClientConfig, HttpLifecycleApi, LifecycleLoader, LoadState};
//! use std::sync::Arc;
//!
//! let config = ClientConfig::default().apply_env()?;
//! let api = Arc::new(HttpLifecycleApi::new(&config)?);
//! let loader = LifecycleLoader::new(api, &config);
//! match loader.load_state().await {
//!     LoadState::Ready(dataset) => println!("{} records", dataset.len()),
//!     LoadState::Failed(screen) => eprintln!("{screen}"),
//!     LoadState::Loading => unreachable!(),
//! }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod snapshot;

// Re-exports for convenience
pub use api::{Endpoint, LifecycleApi, API_PREFIX};
pub use cache::{CacheStats, DatasetCache};
pub use config::ClientConfig;
pub use error::{ConfigError, FailureCategory, FailureScreen, FetchError};
pub use http::{classify_response, HttpLifecycleApi};
pub use loader::{fetch_dataset, LifecycleLoader, LoadState};
pub use snapshot::{Snapshot, StaticLifecycleApi};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
