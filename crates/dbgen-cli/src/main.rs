mod registry;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use dbgen_core::{ClientConfig, Error as CoreError, Limits, PurchaseConfig};
use dbgen_generate::{
    DatasetKind, GenerationEngine, GenerationError, GenerationReport, OutputPaths, fresh_seed,
};
use registry::{RunContext, RunPaths, init_run_logging, start_run, write_report};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "dbgen", version, about = "Synthetic client and purchase datasets")]
struct Cli {
    /// TOML file with `[clients]`, `[purchases]` and `[limits]` sections.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output directory for run artifacts.
    #[arg(long, global = true, default_value = "runs")]
    run_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate fictitious clients.
    Clients(ClientsArgs),
    /// Generate purchases for an existing client dataset.
    Purchases(PurchasesArgs),
}

#[derive(Args, Debug)]
struct ClientsArgs {
    /// Number of clients.
    #[arg(long)]
    count: Option<u64>,
    /// E-mail domain.
    #[arg(long)]
    domain: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "clientes_ficticios.csv")]
    out_csv: PathBuf,
    /// Spreadsheet output. Defaults to the CSV path with an `.xlsx` extension.
    #[arg(long, conflicts_with = "no_xlsx")]
    out_xlsx: Option<PathBuf>,
    /// Skip the spreadsheet output.
    #[arg(long, default_value_t = false)]
    no_xlsx: bool,
}

#[derive(Args, Debug)]
struct PurchasesArgs {
    /// Client dataset to read client codes from.
    #[arg(long, default_value = "clientes_ficticios.csv")]
    clients: PathBuf,
    /// Requested purchase rows. Raised to the client count when lower.
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    value_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    value_max: Option<f64>,
    /// First purchase date (YYYY-MM-DD).
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Last purchase date (YYYY-MM-DD).
    #[arg(long)]
    end: Option<NaiveDate>,
    /// Number of branches.
    #[arg(long)]
    branches: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "compras.csv")]
    out_csv: PathBuf,
    #[arg(long, conflicts_with = "no_xlsx")]
    out_xlsx: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    no_xlsx: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Clients(args) => run_clients(cli.run_dir, config.clients, config.limits, args),
        Command::Purchases(args) => {
            run_purchases(cli.run_dir, config.purchases, config.limits, args)
        }
    }
}

fn run_clients(
    run_dir: PathBuf,
    mut config: ClientConfig,
    limits: Limits,
    args: ClientsArgs,
) -> Result<(), CliError> {
    let ClientsArgs {
        count,
        domain,
        seed,
        out_csv,
        out_xlsx,
        no_xlsx,
    } = args;

    if let Some(count) = count {
        config.count = count;
    }
    if let Some(domain) = domain {
        config.domain = domain;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.seed = Some(config.seed.unwrap_or_else(fresh_seed));
    config.validate(&limits)?;

    let out = output_paths(out_csv, out_xlsx, no_xlsx);
    let paths = begin_run(run_dir, DatasetKind::Clients, &config)?;

    let timer = Instant::now();
    let engine = GenerationEngine::new(limits);
    let report = engine.run_clients(&config, &out)?;
    finish_run(&paths, &report, timer)
}

fn run_purchases(
    run_dir: PathBuf,
    mut config: PurchaseConfig,
    limits: Limits,
    args: PurchasesArgs,
) -> Result<(), CliError> {
    let PurchasesArgs {
        clients,
        rows,
        value_min,
        value_max,
        start,
        end,
        branches,
        seed,
        out_csv,
        out_xlsx,
        no_xlsx,
    } = args;

    if let Some(rows) = rows {
        config.rows = rows;
    }
    if let Some(value_min) = value_min {
        config.value_min = value_min;
    }
    if let Some(value_max) = value_max {
        config.value_max = value_max;
    }
    if let Some(start) = start {
        config.start = start;
    }
    if let Some(end) = end {
        config.end = end;
    }
    if let Some(branches) = branches {
        config.branches = branches;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    config.validate(&limits)?;

    let out = output_paths(out_csv, out_xlsx, no_xlsx);
    let paths = begin_run(run_dir, DatasetKind::Purchases, &config)?;
    tracing::info!(event = "clients_input", path = %clients.display());

    let timer = Instant::now();
    let engine = GenerationEngine::new(limits);
    let report = engine.run_purchases(&config, &clients, &out)?;
    if report.rows_adjusted {
        tracing::warn!(
            event = "rows_adjusted",
            rows_requested = report.rows_requested,
            rows_generated = report.rows_generated,
            "requested rows raised to the client count"
        );
    }
    finish_run(&paths, &report, timer)
}

fn output_paths(csv: PathBuf, xlsx: Option<PathBuf>, no_xlsx: bool) -> OutputPaths {
    let mut out = OutputPaths::with_sibling_xlsx(csv);
    if no_xlsx {
        out.xlsx = None;
    } else if xlsx.is_some() {
        out.xlsx = xlsx;
    }
    out
}

fn begin_run<C: Serialize>(
    run_dir: PathBuf,
    kind: DatasetKind,
    config: &C,
) -> Result<RunPaths, CliError> {
    let run_id = Uuid::new_v4().to_string();
    let ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        kind,
        run_dir,
        config,
    };

    let paths = start_run(&ctx)?;
    init_run_logging(&paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_id, kind = ?kind);
    tracing::info!(event = "config_written", path = %paths.config_path.display());
    Ok(paths)
}

fn finish_run(
    paths: &RunPaths,
    report: &GenerationReport,
    timer: Instant,
) -> Result<(), CliError> {
    write_report(paths, report)?;
    tracing::info!(event = "report_written", path = %paths.report_path.display());

    for output in &report.outputs {
        println!("{}", output.path.display());
    }
    println!("run_dir={}", paths.root.display());

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        status = "success",
        rows = report.rows_generated,
        duration_ms = duration_ms
    );
    Ok(())
}
