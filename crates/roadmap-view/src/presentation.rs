//! Table and chart projections of the lifecycle rows
//!
//! Both projections are built from the same [`LifecycleRows`], one entry per
//! row and in the same order, so table and chart can never disagree on
//! membership.

use crate::view::LifecycleRows;
use chrono::NaiveDate;
use roadmap_model::{LifecycleRecord, SupportStatus};
use serde::Serialize;

/// One table line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Display name
    pub name: String,
    /// Initial RHEL release, for application streams only
    pub initial_release: Option<String>,
    /// Start of support
    pub release_date: Option<NaiveDate>,
    /// End of support
    pub retirement_date: Option<NaiveDate>,
    /// Rolling stream without fixed retirement
    pub rolling: bool,
    /// Support status
    pub status: SupportStatus,
    /// Installed system count
    pub systems: u64,
}

/// One chart bar spanning the support window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    /// Display name
    pub name: String,
    /// Bar start
    pub start: Option<NaiveDate>,
    /// Bar end; `None` draws to the edge of the chart
    pub end: Option<NaiveDate>,
    /// Colour key
    pub status: SupportStatus,
}

/// Project rows into table lines
#[must_use]
pub fn table_rows(rows: &LifecycleRows<'_>) -> Vec<TableRow> {
    match rows {
        LifecycleRows::Systems(records) => records
            .iter()
            .map(|r| TableRow {
                name: r.display_name().into_owned(),
                initial_release: None,
                release_date: r.start_date,
                retirement_date: r.end_date,
                rolling: false,
                status: r.support_status,
                systems: r.count,
            })
            .collect(),
        LifecycleRows::AppStreams(records) => records
            .iter()
            .map(|r| TableRow {
                name: r.display_name().into_owned(),
                initial_release: Some(r.initial_release()),
                release_date: r.start_date,
                retirement_date: r.end_date,
                rolling: r.rolling,
                status: r.support_status,
                systems: r.count,
            })
            .collect(),
    }
}

/// Project rows into chart bars
#[must_use]
pub fn chart_bars(rows: &LifecycleRows<'_>) -> Vec<ChartBar> {
    rows.records()
        .into_iter()
        .map(|r| ChartBar {
            name: r.display_name().into_owned(),
            start: r.start_date(),
            end: r.end_date(),
            status: r.support_status(),
        })
        .collect()
}

/// Earliest and latest date any bar touches
#[must_use]
pub fn chart_range(bars: &[ChartBar]) -> Option<(NaiveDate, NaiveDate)> {
    let dates = bars.iter().flat_map(|bar| [bar.start, bar.end]).flatten();
    let (min, max) = dates.fold((None, None), |(min, max): (Option<NaiveDate>, Option<NaiveDate>), d| {
        (
            Some(min.map_or(d, |m| m.min(d))),
            Some(max.map_or(d, |m| m.max(d))),
        )
    });
    min.zip(max)
}

/// Affected systems of the row whose display name equals `name`
///
/// Matching ignores ASCII case.
#[must_use]
pub fn affected_systems<'a>(rows: &LifecycleRows<'a>, name: &str) -> Option<&'a [String]> {
    rows.records()
        .into_iter()
        .find(|r| r.display_name().eq_ignore_ascii_case(name))
        .map(|r| r.systems())
}
