//! Text timeline chart
//!
//! One bar per row from release to retirement date, scaled to a fixed
//! track width. Open-ended bars run to the right edge and end in `>`.

use chrono::NaiveDate;
use roadmap_view::{chart_bars, chart_range, ChartBar, LifecycleRows};

const TRACK_WIDTH: usize = 48;

/// Render the rows as a timeline, with `today` marked when in range
pub(crate) fn lifecycle_chart(rows: &LifecycleRows<'_>, today: NaiveDate) -> String {
    let bars = chart_bars(rows);
    let Some((first, last)) = chart_range(&bars) else {
        return "No dated rows to chart\n".to_string();
    };
    let scale = Scale::new(first, last);
    let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let axis_gap = TRACK_WIDTH.saturating_sub(20);
    out.push_str(&format!(
        "{:<name_width$}   {first}{:axis_gap$}{last}\n",
        "", ""
    ));
    for bar in &bars {
        let track = track(bar, &scale, today);
        out.push_str(&format!("{:<name_width$}  |{track}|  {}\n", bar.name, bar.status.label()));
    }
    out
}

fn track(bar: &ChartBar, scale: &Scale, today: NaiveDate) -> String {
    let mut cells = vec!['.'; TRACK_WIDTH];
    if let Some(col) = scale.column(today) {
        cells[col] = ':';
    }

    let from = bar.start.and_then(|d| scale.column(d)).unwrap_or(0);
    let to = match bar.end {
        Some(end) => scale.column(end).unwrap_or(TRACK_WIDTH - 1),
        None => TRACK_WIDTH - 1,
    };
    for cell in cells.iter_mut().take(to + 1).skip(from) {
        *cell = '=';
    }
    if bar.end.is_none() {
        cells[TRACK_WIDTH - 1] = '>';
    }
    cells.into_iter().collect()
}

struct Scale {
    first: NaiveDate,
    span_days: i64,
}

impl Scale {
    fn new(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            first,
            span_days: (last - first).num_days().max(1),
        }
    }

    /// Track column of `date`, `None` outside the charted range
    fn column(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first).num_days();
        if !(0..=self.span_days).contains(&offset) {
            return None;
        }
        let max_col = i64::try_from(TRACK_WIDTH - 1).ok()?;
        usize::try_from(offset * max_col / self.span_days).ok()
    }
}
