mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "forecast",
    about = "Subscription revenue forecaster: backsolve, project 24 months, emit CSV and dashboard",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory the reports are written to (default: current directory)
    #[arg(long, global = true, env = "FORECAST_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// YAML scenario file to use instead of the built-in table
    #[arg(long, global = true, env = "FORECAST_SCENARIOS")]
    scenarios: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate revenue_forecast.csv and revenue_dashboard.html (the default)
    Generate {
        /// Open the dashboard in the default browser afterwards
        #[arg(long)]
        open: bool,
    },

    /// Print the 24-month projection
    Show {
        /// Only this scenario (case-insensitive)
        #[arg(long)]
        scenario: Option<String>,
    },

    /// List scenarios with their growth factor and backsolved month-1 counts
    Scenarios,

    /// Verify month-12 round-trip drift, revenue consistency, and growth
    Check,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out_dir = root::resolve_out_dir(cli.out_dir.as_deref());
    let scenarios = cli.scenarios.as_deref();

    let result = match cli.command {
        None => cmd::generate::run(&out_dir, scenarios, false, cli.json),
        Some(Commands::Generate { open }) => {
            cmd::generate::run(&out_dir, scenarios, open, cli.json)
        }
        Some(Commands::Show { scenario }) => {
            cmd::show::run(scenarios, scenario.as_deref(), cli.json)
        }
        Some(Commands::Scenarios) => cmd::scenarios::run(scenarios, cli.json),
        Some(Commands::Check) => cmd::check::run(scenarios, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
