//! Subcommand handlers

use crate::args::{OutputFormat, ViewArgs};
use crate::render;
use anyhow::{bail, Context, Result};
use roadmap_client::{FailureScreen, LifecycleLoader, LoadState};
use roadmap_model::{UpcomingChange, UpcomingType};
use roadmap_view::query::QueryOptions;
use roadmap_view::upcoming::{releases, summarize};
use roadmap_view::{
    affected_systems, csv_file_name, table_rows, to_csv, FilterState, LifecycleDataset,
    LifecycleView, UpcomingFilter,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Outcome of a command
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Output written
    Done,
    /// Data could not be loaded
    Failed(FailureScreen),
}

/// Build the filter state from `--query` and the individual flags
pub(crate) fn resolve_state(view: &ViewArgs, dataset: &LifecycleDataset) -> FilterState {
    let options = QueryOptions::new().with_known_versions(dataset.known_versions());
    let base = view
        .query
        .as_deref()
        .map(|query| FilterState::from_query(query, &options))
        .unwrap_or_default();
    view.actions(&base).into_iter().fold(base, FilterState::apply)
}

pub(crate) async fn lifecycle(
    loader: &LifecycleLoader,
    view: &ViewArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<Outcome> {
    let dataset = match loader.load_state().await {
        LoadState::Ready(dataset) => dataset,
        LoadState::Failed(screen) => return Ok(Outcome::Failed(screen)),
        LoadState::Loading => bail!("lifecycle data still loading"),
    };

    let requested = resolve_state(view, &dataset);
    let computed = LifecycleView::compute(&dataset, &requested);
    if computed.scope_corrected(&requested) {
        tracing::info!(
            requested = %requested.scope,
            shown = %computed.state.scope,
            "no matching records, showing all"
        );
    }
    let query = computed.state.to_query();
    let today = chrono::Local::now().date_naive();

    let body = match format {
        OutputFormat::Table => render::lifecycle_table(&computed.rows),
        OutputFormat::Chart => render::lifecycle_chart(&computed.rows, today),
        OutputFormat::Csv => to_csv(&computed.rows),
        OutputFormat::Json => {
            let doc = LifecycleDocument {
                query: &query,
                state: &computed.state,
                rows: table_rows(&computed.rows),
            };
            let mut text = serde_json::to_string_pretty(&doc)?;
            text.push('\n');
            text
        }
    };

    let output = output.map(|path| {
        if path.is_dir() && format == OutputFormat::Csv {
            path.join(csv_file_name(today))
        } else {
            path
        }
    });
    match output {
        Some(path) => {
            std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("wrote {} rows to {}", computed.rows.len(), path.display());
            eprintln!("query: ?{query}");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            if matches!(format, OutputFormat::Table | OutputFormat::Chart) {
                writeln!(stdout, "\n{} rows  query: ?{query}", computed.rows.len())?;
            } else {
                eprintln!("query: ?{query}");
            }
        }
    }
    Ok(Outcome::Done)
}

#[derive(Serialize)]
struct LifecycleDocument<'a> {
    query: &'a str,
    state: &'a FilterState,
    rows: Vec<roadmap_view::TableRow>,
}

pub(crate) async fn upcoming(
    loader: &LifecycleLoader,
    filter: UpcomingFilter,
    json: bool,
) -> Result<Outcome> {
    let changes = match loader.upcoming_state().await {
        LoadState::Ready(changes) => changes,
        LoadState::Failed(screen) => return Ok(Outcome::Failed(screen)),
        LoadState::Loading => bail!("upcoming changes still loading"),
    };

    let available = releases(&changes);
    for release in &filter.releases {
        if !available.contains(release) {
            tracing::warn!(%release, "no upcoming changes target this release");
        }
    }

    let kept = filter.apply(&changes);
    let mut stdout = std::io::stdout().lock();
    if json {
        let doc = UpcomingDocument {
            summary: summarize(&kept).into_iter().collect(),
            releases: &available,
            changes: &kept,
        };
        serde_json::to_writer_pretty(&mut stdout, &doc)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(upcoming_report(&kept, &available).as_bytes())?;
    }
    Ok(Outcome::Done)
}

/// Table of `kept` followed by per-type counts and the release options
pub(crate) fn upcoming_report(kept: &[&UpcomingChange], available: &[String]) -> String {
    let counts: Vec<String> = summarize(kept)
        .iter()
        .filter(|(kind, _)| **kind != UpcomingType::Unknown)
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect();
    format!(
        "{}\n{}\nreleases: {}\n",
        render::upcoming_table(kept),
        counts.join("  "),
        available.join(", ")
    )
}

#[derive(Serialize)]
struct UpcomingDocument<'a> {
    summary: Vec<(UpcomingType, usize)>,
    releases: &'a [String],
    changes: &'a [&'a UpcomingChange],
}

pub(crate) async fn systems(loader: &LifecycleLoader, name: &str, view: &ViewArgs) -> Result<Outcome> {
    let dataset = match loader.load_state().await {
        LoadState::Ready(dataset) => dataset,
        LoadState::Failed(screen) => return Ok(Outcome::Failed(screen)),
        LoadState::Loading => bail!("lifecycle data still loading"),
    };

    let state = resolve_state(view, &dataset);
    let computed = LifecycleView::compute(&dataset, &state);
    let Some(systems) = affected_systems(&computed.rows, name) else {
        bail!("no row named '{name}' in the current view (query: ?{})", computed.state.to_query());
    };

    let mut stdout = std::io::stdout().lock();
    for system in systems {
        writeln!(stdout, "{system}")?;
    }
    if systems.is_empty() {
        eprintln!("'{name}' has no affected systems");
    }
    Ok(Outcome::Done)
}
