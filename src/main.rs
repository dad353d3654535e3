//! rosterfill CLI - supplementary shift assignment over a roster workbook.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_rosterfill::extra::{ExtraConfig, ExtraRunner};
use u_rosterfill::grid::{resolve_input, Workbook};
use u_rosterfill::simple::{SimpleConfig, SimpleRunner};

const EXTRA_INPUTS: &[&str] = &[
    "horario_procesado_con_sabados_domingos.json",
    "horarioUnificado_procesado.json",
];
const EXTRA_OUTPUT: &str = "horarioUnificado_con_1t.json";

const SIMPLE_INPUTS: &[&str] = &[
    "horarioUnificado_con_mofis.json",
    "horarioUnificado_con_diurnas.json",
    "horarioUnificado_procesado.json",
];
const SIMPLE_OUTPUT: &str = "horarioUnificado_con_sencillos.json";

#[derive(Parser)]
#[command(name = "rosterfill")]
#[command(about = "Fill supplementary shifts into a roster workbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Input workbook (defaults to the first existing known file)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output workbook
    #[arg(long)]
    output: Option<PathBuf>,
    /// Seed for the random tie-break
    #[arg(long)]
    seed: Option<u64>,
    /// Also write the run report as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign one 1T or 7 per day
    Extra(RunArgs),
    /// Assign simplified shifts by headcount
    Simple(RunArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extra(args) => {
            let mut workbook = load(&args, EXTRA_INPUTS)?;
            let mut config = ExtraConfig::default();
            config.seed = args.seed;
            let report = ExtraRunner::run(&mut workbook.schedule, &config)?;
            workbook.refresh_statistics();

            let written = workbook.save(output(&args, EXTRA_OUTPUT))?;
            println!("{report}");
            println!("Saved to {}", written.display());
            write_report(&args, &report)?;
        }
        Commands::Simple(args) => {
            let mut workbook = load(&args, SIMPLE_INPUTS)?;
            let mut config = SimpleConfig::default();
            config.seed = args.seed;
            let report = SimpleRunner::run(&mut workbook.schedule, &config)?;

            let written = workbook.save(output(&args, SIMPLE_OUTPUT))?;
            println!("{report}");
            println!(
                "Saved to {} ({} codes assigned)",
                written.display(),
                report.assigned_count()
            );
            write_report(&args, &report)?;
        }
    }

    Ok(())
}

fn load(args: &RunArgs, defaults: &[&str]) -> Result<Workbook> {
    let path = resolve_input(args.input.as_deref(), defaults);
    info!(path = %path.display(), "reading workbook");
    Workbook::load(&path).with_context(|| format!("failed to load {}", path.display()))
}

fn output(args: &RunArgs, default: &str) -> PathBuf {
    args.output.clone().unwrap_or_else(|| PathBuf::from(default))
}

fn write_report<T: Serialize>(args: &RunArgs, report: &T) -> Result<()> {
    let Some(path) = &args.report else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}
