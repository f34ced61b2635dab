//! Testing utilities for the Digital Roadmap workspace
//!
//! Shared record fixtures shaped like real backend responses.

#![allow(missing_docs)]

use chrono::NaiveDate;
use roadmap_model::{
    AppStreamLifecycleRecord, LifecycleType, SupportStatus, SystemLifecycleRecord, UpcomingChange,
    UpcomingType,
};

pub fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn rhel(major: u32, minor: u32, start: Option<NaiveDate>, end: Option<NaiveDate>) -> SystemLifecycleRecord {
    SystemLifecycleRecord::new("RHEL", major, minor)
        .with_dates(start, end)
        .with_status(SupportStatus::Supported)
        .with_lifecycle_type(LifecycleType::Mainline)
}

pub fn app_stream(
    name: &str,
    display_name: &str,
    os_major: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> AppStreamLifecycleRecord {
    AppStreamLifecycleRecord::new(name, display_name, os_major)
        .with_dates(start, end)
        .with_status(SupportStatus::Supported)
}

/// Every RHEL release the fixtures know about
pub fn all_systems() -> Vec<SystemLifecycleRecord> {
    vec![
        rhel(8, 6, ymd(2022, 5, 10), ymd(2024, 5, 31)).with_status(SupportStatus::Retired),
        rhel(8, 10, ymd(2024, 5, 22), ymd(2029, 5, 31)),
        rhel(9, 2, ymd(2023, 5, 10), ymd(2025, 5, 31)).with_status(SupportStatus::NearRetirement),
        rhel(9, 4, ymd(2024, 4, 30), ymd(2026, 4, 30)),
        rhel(10, 0, ymd(2025, 5, 13), ymd(2035, 5, 31)),
    ]
}

/// Releases running on the fleet, one of them related only
pub fn relevant_systems() -> Vec<SystemLifecycleRecord> {
    vec![
        rhel(8, 10, ymd(2024, 5, 22), ymd(2029, 5, 31)).with_systems(["host-a", "host-b"]),
        rhel(9, 4, ymd(2024, 4, 30), ymd(2026, 4, 30)).with_systems(["host-c"]),
        rhel(9, 2, ymd(2023, 5, 10), ymd(2025, 5, 31))
            .with_status(SupportStatus::NearRetirement)
            .related(),
    ]
}

/// Application streams across RHEL 8, 9 and 10
pub fn all_app_streams() -> Vec<AppStreamLifecycleRecord> {
    vec![
        app_stream("nodejs", "Node.js 18", 9, ymd(2023, 5, 10), ymd(2025, 4, 30)).with_os_minor(2),
        app_stream("nodejs", "Node.js 22", 9, ymd(2024, 11, 12), ymd(2027, 4, 30)).with_os_minor(5),
        app_stream("postgresql", "PostgreSQL 16", 9, ymd(2024, 4, 30), ymd(2029, 11, 30)).with_os_minor(4),
        app_stream("nginx", "nginx 1.26", 9, ymd(2024, 11, 12), None).with_os_minor(5).rolling(),
        app_stream("python3.12", "Python 3.12", 8, ymd(2024, 5, 22), ymd(2029, 5, 31)).with_os_minor(10),
        app_stream("php", "PHP 8.2", 8, ymd(2023, 11, 14), ymd(2029, 5, 31)).with_os_minor(9),
        app_stream("valkey", "Valkey 8", 10, ymd(2025, 5, 13), ymd(2028, 5, 31)),
    ]
}

/// Streams installed on the fleet; nothing on RHEL 10
pub fn relevant_app_streams() -> Vec<AppStreamLifecycleRecord> {
    vec![
        app_stream("nodejs", "Node.js 22", 9, ymd(2024, 11, 12), ymd(2027, 4, 30))
            .with_os_minor(5)
            .with_systems(["host-c"]),
        app_stream("postgresql", "PostgreSQL 16", 9, ymd(2024, 4, 30), ymd(2029, 11, 30))
            .with_os_minor(4)
            .with_systems(["host-c", "host-d", "host-e"]),
        app_stream("php", "PHP 8.2", 8, ymd(2023, 11, 14), ymd(2029, 5, 31))
            .with_os_minor(9)
            .with_systems(["host-a"]),
        app_stream("nodejs", "Node.js 18", 9, ymd(2023, 5, 10), ymd(2025, 4, 30))
            .with_os_minor(2)
            .related(),
    ]
}

pub fn upcoming_changes() -> Vec<UpcomingChange> {
    vec![
        UpcomingChange::new("Valkey 8", UpcomingType::Addition, "10.1", "2025-11")
            .with_summary("Valkey is added as an application stream"),
        UpcomingChange::new("Python 3.9 removal", UpcomingType::Deprecation, "10.0", "2025-05")
            .with_summary("Python 3.9 is no longer shipped"),
        UpcomingChange::new("OpenSSL 3.5", UpcomingType::Change, "10.1", "2025-11"),
        UpcomingChange::new("Faster boot", UpcomingType::Enhancement, "9.6", "2025-05"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_consistent() {
        assert!(relevant_systems()
            .iter()
            .all(|r| all_systems().iter().any(|a| a.major == r.major && a.minor == r.minor)));
        assert!(relevant_app_streams().iter().all(|r| r.os_major != 10));
    }
}
