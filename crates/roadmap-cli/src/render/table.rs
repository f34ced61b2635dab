//! Aligned text tables

use roadmap_model::UpcomingChange;
use roadmap_view::{csv_columns, row_fields, LifecycleRows};

const GAP: &str = "  ";

/// Lifecycle rows under the same columns as the CSV export
pub(crate) fn lifecycle_table(rows: &LifecycleRows<'_>) -> String {
    grid(csv_columns(rows), &row_fields(rows))
}

/// Upcoming changes, one per line
pub(crate) fn upcoming_table(changes: &[&UpcomingChange]) -> String {
    let cells: Vec<Vec<String>> = changes
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.change_type.label().to_string(),
                c.release.clone(),
                c.date.clone(),
                c.details.summary.clone(),
            ]
        })
        .collect();
    grid(&["Name", "Type", "Release", "Date", "Summary"], &cells)
}

fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(GAP).trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadmap_test_utils as fixtures;
    use roadmap_view::{FilterAction, FilterState, LifecycleDataset, LifecycleDomain, LifecycleView};

    #[test]
    fn columns_align() {
        let out = grid(&["Name", "N"], &[vec!["a".to_string(), "10".to_string()]]);
        assert_eq!(out, "Name  N\n----  --\na     10\n");
    }

    #[test]
    fn systems_table_has_no_initial_release() {
        let dataset = LifecycleDataset::from_responses(
            fixtures::all_systems(),
            fixtures::relevant_systems(),
            Vec::new(),
            Vec::new(),
        );
        let state = FilterState::default().apply(FilterAction::SetDomain(LifecycleDomain::RhelSystems));
        let view = LifecycleView::compute(&dataset, &state);

        let out = lifecycle_table(&view.rows);
        let header = out.lines().next().unwrap_or_default();
        assert!(header.starts_with("Name"));
        assert!(!header.contains("Initial release"));
        assert_eq!(out.lines().count(), view.rows.len() + 2);
    }

    #[test]
    fn upcoming_rows() {
        let changes = fixtures::upcoming_changes();
        let refs: Vec<&UpcomingChange> = changes.iter().collect();
        let out = upcoming_table(&refs);
        assert_eq!(out.lines().count(), 6);
        assert!(out.contains("Deprecation"));
    }
}
