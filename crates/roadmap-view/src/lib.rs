//! Digital Roadmap View Engine
//!
//! Pure filter, sort and scope state machine over cached lifecycle data.
//!
//! # Core Operations
//!
//! - **Reduce**: map a [`FilterAction`] onto the current [`FilterState`]
//! - **Compute**: run the state against a [`LifecycleDataset`] to get rows
//! - **Sync**: read and write the state as URL query parameters
//! - **Export**: render the rows as table lines, chart bars or CSV
//!
//! # Architecture
//!
//! ```text
//! URL query → FilterState ──reduce(action)──→ FilterState → URL query
//!                  │
//!                  ▼
//! LifecycleDataset → scope → domain → filters → sort → LifecycleRows
//!                                                        ├→ table_rows
//!                                                        ├→ chart_bars
//!                                                        └→ to_csv
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_view::prelude::*;
//!
//! let state = FilterState::from_query(query, &QueryOptions::new())
//!     .apply(FilterAction::SortBy(SortField::Systems));
//! let view = LifecycleView::compute(&dataset, &state);
//! println!("{}", view.state.to_query());
//! print!("{}", to_csv(&view.rows));
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
pub mod dataset;
pub mod domain;
pub mod error;
pub mod export;
pub mod filter;
pub mod presentation;
pub mod query;
pub mod reconcile;
pub mod scope;
pub mod sort;
pub mod state;
pub mod upcoming;
pub mod view;

// Re-exports for convenience
pub use dataset::{LifecycleDataset, ScopedCollection};
pub use domain::LifecycleDomain;
pub use error::ParseValueError;
pub use export::{csv_columns, csv_file_name, row_fields, to_csv};
pub use presentation::{affected_systems, chart_bars, chart_range, table_rows, ChartBar, TableRow};
pub use query::{sync_url, QueryOptions};
pub use reconcile::{reconcile_scope, working_set, WorkingSet};
pub use scope::ViewScope;
pub use sort::{natural_cmp, SortDirection, SortField};
pub use state::{reduce, FilterAction, FilterState};
pub use upcoming::UpcomingFilter;
pub use view::{LifecycleRows, LifecycleView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the view engine
    pub use crate::{
        to_csv, FilterAction, FilterState, LifecycleDataset, LifecycleDomain, LifecycleRows,
        LifecycleView, QueryOptions, SortDirection, SortField, ViewScope,
    };
}
