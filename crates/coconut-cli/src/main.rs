use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use coconut_cli::output::{render_summary, OutputFormat};
use coconut_lib::{load_jetstreams, plan_route, RouteSummary};

/// Exit status used when the command line is incomplete, matching clap's
/// own usage errors.
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the most energy-efficient route along the jetstream corridor"
)]
struct Cli {
    /// Jetstream description file to load.
    #[arg(short = 'i', long = "input", value_name = "FILENAME")]
    input: Option<PathBuf>,

    /// Output format for the computed route.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let Some(input) = cli.input.as_deref() else {
        eprintln!("no input file supplied");
        eprintln!("{}", Cli::command().render_help());
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    };

    handle_route(input, cli.format)?;
    Ok(ExitCode::SUCCESS)
}

fn handle_route(input: &Path, format: OutputFormat) -> Result<()> {
    let jetstreams = load_jetstreams(input)
        .with_context(|| format!("failed to load jetstreams from {}", input.display()))?;
    let mut graph = jetstreams.into_graph();
    let plan = plan_route(&mut graph).context("failed to plan a route along the corridor")?;

    let summary = RouteSummary::from_plan(&plan);
    render_summary(&summary, format)?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
