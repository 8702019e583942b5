use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use fraction_resolver::application::dto::OutputFormat;
use std::path::PathBuf;

/// Resolve fraction-aware dependency maps from build snapshots
#[derive(Parser, Debug)]
#[command(name = "fraction-resolver")]
#[command(version)]
#[command(
    about = "Resolve fraction-aware dependency maps from build snapshots",
    long_about = None
)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output; errors are still reported
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a configuration into top-level dependencies and promoted fractions
    Resolve(ResolveArgs),
    /// Resolve a list of artifact specs against the snapshot
    Specs(SpecsArgs),
    /// Show the expectations derived from a testing project scenario
    Scenario(ScenarioArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ResolveArgs {
    /// Build snapshot (JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Fraction catalog (TOML)
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Configuration to resolve [default: runtimeClasspath]
    #[arg(long)]
    pub configuration: Option<String>,

    /// Keep only direct children instead of promoting fraction subtrees
    #[arg(long)]
    pub direct_children_only: bool,

    /// Output format: json or text
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file [default: fraction-resolver.config.yml next to the snapshot]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SpecsArgs {
    /// Build snapshot (JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Artifact specs (JSON array)
    #[arg(long)]
    pub specs: PathBuf,

    /// Resolve dependencies of every spec as well
    #[arg(long)]
    pub transitive: bool,

    /// Skip default-group specs that are not projects of the build
    #[arg(long)]
    pub exclude_defaults: bool,

    /// Group supplied by the runtime [default: io.thorntail]
    #[arg(long)]
    pub default_group: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file [default: fraction-resolver.config.yml next to the snapshot]
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ScenarioArgs {
    /// Serialized scenario, e.g. WAR:FRACTIONS:NEVER:SERVLET:NONE:NONE
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub record: Option<String>,

    /// List every valid serialized scenario instead
    #[arg(long)]
    pub all: bool,

    /// Also print the dependency and plugin configuration snippets
    #[arg(long)]
    pub snippets: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
