//! CSV export of the displayed rows

use crate::presentation::{table_rows, TableRow};
use crate::view::LifecycleRows;
use roadmap_model::date::{format_opt, DATE_FORMAT};

/// Placeholder for a missing date
pub const MISSING_DATE: &str = "Not available";

/// Retirement placeholder for rolling application streams
pub const ROLLING: &str = "Rolling";

const APP_STREAM_COLUMNS: [&str; 6] = [
    "Name",
    "Initial release",
    "Release date",
    "Retirement date",
    "Support status",
    "Systems",
];

const SYSTEM_COLUMNS: [&str; 5] = [
    "Name",
    "Release date",
    "Retirement date",
    "Support status",
    "Systems",
];

/// Column headers for the rows' data domain
#[must_use]
pub fn csv_columns(rows: &LifecycleRows<'_>) -> &'static [&'static str] {
    if rows.is_systems() {
        &SYSTEM_COLUMNS
    } else {
        &APP_STREAM_COLUMNS
    }
}

/// Cell text of every row, in [`csv_columns`] order
#[must_use]
pub fn row_fields(rows: &LifecycleRows<'_>) -> Vec<Vec<String>> {
    let systems = rows.is_systems();
    table_rows(rows)
        .into_iter()
        .map(|row| {
            let mut fields = vec![row.name.clone()];
            if !systems {
                fields.push(row.initial_release.clone().unwrap_or_default());
            }
            fields.push(format_opt(row.release_date, MISSING_DATE));
            fields.push(retirement_field(&row));
            fields.push(row.status.label().to_string());
            fields.push(row.systems.to_string());
            fields
        })
        .collect()
}

/// Render the rows as CSV, header line included
#[must_use]
pub fn to_csv(rows: &LifecycleRows<'_>) -> String {
    let mut out = String::new();
    push_line(&mut out, csv_columns(rows).iter().map(|c| (*c).to_string()));
    for fields in row_fields(rows) {
        push_line(&mut out, fields);
    }
    out
}

/// Suggested download file name, e.g. `roadmap-lifecycle-2025-01-31.csv`
#[must_use]
pub fn csv_file_name(today: chrono::NaiveDate) -> String {
    format!("roadmap-lifecycle-{}.csv", today.format(DATE_FORMAT))
}

fn retirement_field(row: &TableRow) -> String {
    match row.retirement_date {
        None if row.rolling => ROLLING.to_string(),
        date => format_opt(date, MISSING_DATE),
    }
}

fn push_line(out: &mut String, fields: impl IntoIterator<Item = String>) {
    let line: Vec<String> = fields.into_iter().map(|f| csv_escape(&f)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

/// Minimal CSV field escaping (wraps in quotes if needed).
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use roadmap_model::{AppStreamLifecycleRecord, SupportStatus, SystemLifecycleRecord};

    #[test]
    fn app_stream_export() {
        let a = AppStreamLifecycleRecord::new("nodejs", "Node.js 22", 9)
            .with_os_minor(5)
            .with_dates(NaiveDate::from_ymd_opt(2024, 11, 12), NaiveDate::from_ymd_opt(2027, 4, 30))
            .with_status(SupportStatus::Supported)
            .with_systems(["a", "b"]);
        let b = AppStreamLifecycleRecord::new("nginx", "nginx, mainline", 9).rolling();
        let rows = LifecycleRows::AppStreams(vec![&a, &b]);

        assert_eq!(
            to_csv(&rows),
            "Name,Initial release,Release date,Retirement date,Support status,Systems\n\
             Node.js 22,RHEL 9.5,2024-11-12,2027-04-30,Supported,2\n\
             \"nginx, mainline\",RHEL 9.0,Not available,Rolling,Unknown,0\n"
        );
    }

    #[test]
    fn system_export_has_no_release_column() {
        let a = SystemLifecycleRecord::new("RHEL", 8, 10)
            .with_dates(NaiveDate::from_ymd_opt(2024, 5, 22), None)
            .with_status(SupportStatus::Supported);
        let rows = LifecycleRows::Systems(vec![&a]);

        assert_eq!(
            to_csv(&rows),
            "Name,Release date,Retirement date,Support status,Systems\n\
             RHEL 8.10,2024-05-22,Not available,Supported,0\n"
        );
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("plain"), "plain");
    }

    #[test]
    fn file_name_carries_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(csv_file_name(today), "roadmap-lifecycle-2025-01-31.csv");
    }
}
