mod cli;

use cli::{Args, Command, ResolveArgs, ScenarioArgs, SpecsArgs};
use fraction_resolver::adapters::outbound::build_snapshot::BuildSnapshot;
use fraction_resolver::adapters::outbound::catalog::TomlFractionCatalog;
use fraction_resolver::adapters::outbound::console::StderrProgressReporter;
use fraction_resolver::adapters::outbound::filesystem::FileSystemReader;
use fraction_resolver::application::dto::{ResolveRequest, SpecsRequest};
use fraction_resolver::application::factories::{FormatterFactory, PresenterFactory};
use fraction_resolver::application::read_models::ResolutionReportBuilder;
use fraction_resolver::application::use_cases::{
    ResolveArtifactSpecsUseCase, ResolveProjectDependenciesUseCase,
};
use fraction_resolver::config::{self, ConfigFile, DEFAULT_CONFIGURATION, DEFAULT_GROUP};
use fraction_resolver::fraction_resolution::domain::{ArtifactSpec, DependencyDescriptor};
use fraction_resolver::ports::outbound::InputReader;
use fraction_resolver::shared::error::{ExitCode, ResolverError};
use fraction_resolver::shared::{BuildCache, Result};
use fraction_resolver::testing_project::{all_valid_projects, TestingProject};
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();
    init_tracing(args.log_level());

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Resolve(resolve) => run_resolve(resolve, args.quiet),
        Command::Specs(specs) => run_specs(specs),
        Command::Scenario(scenario) => run_scenario(scenario),
    }
}

/// Explicit `--config` wins; otherwise look next to the snapshot
fn load_config(explicit: Option<&Path>, snapshot: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }
    let dir = snapshot
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(config::discover_config(dir)?.unwrap_or_default())
}

fn run_resolve(args: ResolveArgs, quiet: bool) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.snapshot)?;

    let configuration = args
        .configuration
        .or(config.configuration.clone())
        .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string());
    if configuration.trim().is_empty() {
        return Err(ResolverError::invalid_configuration(
            "configuration must not be empty.\n\n💡 Hint: Omit --configuration to resolve runtimeClasspath.",
        )
        .into());
    }
    let transitive_children = if args.direct_children_only {
        false
    } else {
        config.transitive_children.unwrap_or(true)
    };
    let format = args
        .format
        .or(config.output_format())
        .unwrap_or_default();

    let reader = FileSystemReader::new();
    let snapshot = BuildSnapshot::load(&reader, &args.snapshot)?;
    let catalog = TomlFractionCatalog::load(&reader, &args.catalog)?;
    let progress_reporter = if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = ResolveProjectDependenciesUseCase::new(
        &snapshot,
        catalog,
        &snapshot,
        progress_reporter,
        Arc::new(BuildCache::new()),
    );
    let response = use_case.execute(ResolveRequest::new(configuration, transitive_children))?;

    let report = ResolutionReportBuilder::build(&response);
    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let formatted_output = FormatterFactory::create(format).format(&report)?;

    let presenter = PresenterFactory::create(args.output.into());
    presenter.present(&formatted_output)?;

    Ok(())
}

fn run_specs(args: SpecsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), &args.snapshot)?;

    let default_group = args
        .default_group
        .or(config.default_group.clone())
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());
    let request = SpecsRequest::new(
        args.transitive || config.transitive_children.unwrap_or(false),
        args.exclude_defaults || config.exclude_defaults.unwrap_or(false),
        default_group,
    );

    let reader = FileSystemReader::new();
    let snapshot = BuildSnapshot::load(&reader, &args.snapshot)?;
    let specs = read_specs(&reader, &args.specs)?;

    let use_case = ResolveArtifactSpecsUseCase::new(&snapshot, &snapshot, Arc::new(BuildCache::new()));
    let resolved = use_case.execute(Some(specs.as_slice()), &request)?;

    let mut descriptors: Vec<DependencyDescriptor> = resolved.into_iter().collect();
    descriptors.sort();
    let formatted_output = serde_json::to_string_pretty(&descriptors)?;

    let presenter = PresenterFactory::create(args.output.into());
    presenter.present(&formatted_output)?;

    Ok(())
}

fn read_specs<R: InputReader>(reader: &R, path: &Path) -> Result<Vec<ArtifactSpec>> {
    let content = reader.read_input(path)?;
    serde_json::from_str(&content).map_err(|e| {
        ResolverError::FileReadError {
            path: path.to_path_buf(),
            details: format!("expected a JSON array of artifact specs: {}", e),
        }
        .into()
    })
}

fn run_scenario(args: ScenarioArgs) -> Result<()> {
    if args.all {
        for project in all_valid_projects() {
            println!("{}", project.serialize());
        }
        return Ok(());
    }

    let Some(record) = args.record else {
        return Ok(());
    };
    let project = TestingProject::deserialize(&record)?;
    print_scenario(&project, args.snippets);
    Ok(())
}

fn print_scenario(project: &TestingProject, snippets: bool) {
    println!("{}", project);
    println!("tests runnable: {}", project.tests_runnable());
    println!("autodetection effective: {}", project.autodetection_effective());
    println!("expected fractions: {}", join(project.expected_present_fractions()));
    println!("absent fractions: {}", join(project.expected_absent_fractions()));

    if snippets {
        println!("\n# dependencies\n{}", project.dependencies_snippet());
        println!("\n# plugin configuration\n{}", project.plugin_configuration_snippet());
    }
}

fn join(fractions: impl IntoIterator<Item = &'static str>) -> String {
    let fractions: Vec<&str> = fractions.into_iter().collect();
    if fractions.is_empty() {
        "(none)".to_string()
    } else {
        fractions.join(", ")
    }
}
