//! Command-line arguments

use clap::{Args, Parser, Subcommand, ValueEnum};
use roadmap_model::UpcomingType;
use roadmap_view::{FilterAction, FilterState, LifecycleDomain, SortDirection, SortField, ViewScope};
use std::path::PathBuf;

/// Digital Roadmap lifecycle viewer
#[derive(Debug, Parser)]
#[command(name = "roadmap", version, about)]
pub(crate) struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Console base URL, overriding config and environment
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Serve data from a JSON snapshot instead of the backend
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) fixture: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show the lifecycle table, chart or export
    Lifecycle {
        #[command(flatten)]
        view: ViewArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List upcoming roadmap changes
    Upcoming {
        /// Name substring
        #[arg(long)]
        name: Option<String>,

        /// Change type (addition, change, deprecation, enhancement)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<UpcomingType>,

        /// Target release, e.g. 10.1
        #[arg(long = "release", value_name = "RELEASE")]
        releases: Vec<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the systems behind one lifecycle row
    Systems {
        /// Row name as displayed, e.g. "Node.js 22" or "RHEL 9.4"
        name: String,

        #[command(flatten)]
        view: ViewArgs,
    },
}

/// Filter flags shared by the lifecycle commands
///
/// `--query` is applied first; individual flags override it.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct ViewArgs {
    /// Lifecycle query string, as found in the dashboard URL
    #[arg(long, value_name = "QUERY")]
    pub(crate) query: Option<String>,

    /// Name substring
    #[arg(long)]
    pub(crate) name: Option<String>,

    /// Data domain
    #[arg(long, value_enum)]
    pub(crate) domain: Option<DomainArg>,

    /// View scope
    #[arg(long, value_enum)]
    pub(crate) scope: Option<ScopeArg>,

    /// Sort field
    #[arg(long, value_enum)]
    pub(crate) sort: Option<SortArg>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub(crate) order: Option<OrderArg>,

    /// RHEL major release to keep, e.g. 9 (systems domain only)
    #[arg(long = "version", value_name = "MAJOR")]
    pub(crate) versions: Vec<u32>,
}

impl ViewArgs {
    /// Actions the flags translate to, in application order
    pub(crate) fn actions(&self, state: &FilterState) -> Vec<FilterAction> {
        let mut actions = Vec::new();
        if let Some(domain) = self.domain {
            actions.push(FilterAction::SetDomain(domain.into()));
        }
        if let Some(scope) = self.scope {
            actions.push(FilterAction::SetScope(scope.into()));
        }
        if let Some(name) = &self.name {
            actions.push(FilterAction::SetName(name.clone()));
        }
        if !self.versions.is_empty() {
            actions.push(FilterAction::SetVersions(
                self.versions.iter().copied().map(roadmap_model::version_label).collect(),
            ));
        }
        if let Some(sort) = self.sort {
            let field = SortField::from(sort);
            if field != state.sort_field {
                actions.push(FilterAction::SortBy(field));
            }
        }
        if let Some(order) = self.order {
            actions.push(FilterAction::SetSortDirection(order.into()));
        }
        actions
    }
}

/// Output format of `lifecycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Chart,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DomainArg {
    #[value(alias = "rhel9-app-streams")]
    AppStreams,
    Rhel8AppStreams,
    Rhel10AppStreams,
    RhelSystems,
}

impl From<DomainArg> for LifecycleDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::AppStreams => Self::DefaultAppStreams,
            DomainArg::Rhel8AppStreams => Self::Rhel8AppStreams,
            DomainArg::Rhel10AppStreams => Self::Rhel10AppStreams,
            DomainArg::RhelSystems => Self::RhelSystems,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScopeArg {
    All,
    InstalledOnly,
    InstalledAndRelated,
}

impl From<ScopeArg> for ViewScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Self::All,
            ScopeArg::InstalledOnly => Self::InstalledOnly,
            ScopeArg::InstalledAndRelated => Self::InstalledAndRelated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    Name,
    ReleaseVersion,
    ReleaseDate,
    RetirementDate,
    Systems,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::ReleaseVersion => Self::ReleaseVersion,
            SortArg::ReleaseDate => Self::ReleaseDate,
            SortArg::RetirementDate => Self::RetirementDate,
            SortArg::Systems => Self::Systems,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => Self::Asc,
            OrderArg::Desc => Self::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("roadmap").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn lifecycle_flags() {
        let cli = parse(&[
            "lifecycle",
            "--domain",
            "rhel-systems",
            "--version",
            "8",
            "--sort",
            "release-version",
            "--format",
            "csv",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Command::Lifecycle { view, format, .. } => {
                assert_eq!(format, OutputFormat::Csv);
                assert_eq!(view.domain, Some(DomainArg::RhelSystems));
                assert_eq!(view.versions, [8]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn upcoming_types_parse_case_insensitively() {
        let cli = parse(&["upcoming", "--type", "Deprecation", "--type", "addition"]);
        match cli.command {
            Command::Upcoming { types, .. } => {
                assert_eq!(types, [UpcomingType::Deprecation, UpcomingType::Addition]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn flags_become_actions_after_domain() {
        let view = ViewArgs {
            domain: Some(DomainArg::RhelSystems),
            name: Some("9.".to_string()),
            versions: vec![9],
            ..ViewArgs::default()
        };
        let state = view
            .actions(&FilterState::default())
            .into_iter()
            .fold(FilterState::default(), FilterState::apply);

        assert_eq!(state.domain, LifecycleDomain::RhelSystems);
        assert_eq!(state.name, "9.");
        assert!(state.versions.contains("RHEL 9"));
    }

    #[test]
    fn sort_flag_selects_without_toggling() {
        let view = ViewArgs {
            sort: Some(SortArg::RetirementDate),
            ..ViewArgs::default()
        };
        let start = FilterState::default();
        let state = view.actions(&start).into_iter().fold(start.clone(), FilterState::apply);
        assert_eq!(state.sort_direction, start.sort_direction);
    }

    #[test]
    fn rejects_unknown_domain() {
        assert!(Cli::try_parse_from(["roadmap", "lifecycle", "--domain", "centos"]).is_err());
    }
}
