//! `roadmap`: Digital Roadmap lifecycle viewer

mod args;
mod commands;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Command};
use clap::Parser;
use commands::Outcome;
use roadmap_client::{ClientConfig, HttpLifecycleApi, LifecycleApi, LifecycleLoader, StaticLifecycleApi};
use roadmap_view::UpcomingFilter;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Exit code when the backend reported a failure screen
const EXIT_LOAD_FAILED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Failed(screen)) => {
            eprintln!("{}", screen.title());
            eprintln!("{}", screen.message());
            ExitCode::from(EXIT_LOAD_FAILED)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    let mut config = config.apply_env()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url.as_str());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    Ok(config)
}

fn build_loader(cli: &Cli, config: &ClientConfig) -> Result<LifecycleLoader> {
    match &cli.fixture {
        Some(path) => {
            let api: Arc<dyn LifecycleApi> = Arc::new(StaticLifecycleApi::load(path)?);
            Ok(LifecycleLoader::new(api, config).with_source(path.display().to_string()))
        }
        None => {
            let api = HttpLifecycleApi::new(config).context("configuring backend client")?;
            tracing::debug!(base_url = %config.base_url, "using backend");
            Ok(LifecycleLoader::new(Arc::new(api), config))
        }
    }
}

async fn run(cli: Cli) -> Result<Outcome> {
    let config = load_config(&cli)?;
    let loader = build_loader(&cli, &config)?;

    match cli.command {
        Command::Lifecycle { view, format, output } => {
            commands::lifecycle(&loader, &view, format, output).await
        }
        Command::Upcoming {
            name,
            types,
            releases,
            json,
        } => {
            let filter = UpcomingFilter::new()
                .with_name(name.unwrap_or_default())
                .with_types(types)
                .with_releases(releases);
            commands::upcoming(&loader, filter, json).await
        }
        Command::Systems { name, view } => commands::systems(&loader, &name, &view).await,
    }
}
