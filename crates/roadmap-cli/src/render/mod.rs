//! Plain-text rendering

pub(crate) mod chart;
pub(crate) mod table;

pub(crate) use chart::lifecycle_chart;
pub(crate) use table::{lifecycle_table, upcoming_table};
