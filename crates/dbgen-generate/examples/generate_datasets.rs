use std::env;
use std::path::PathBuf;

use dbgen_core::{ClientConfig, Limits, PurchaseConfig};
use dbgen_generate::{GenerationEngine, OutputPaths};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir = PathBuf::from("out");
    let mut clients = 200_u64;
    let mut rows = 5000_i64;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from).ok_or("missing --out value")?,
            "--clients" => clients = args.next().ok_or("missing --clients value")?.parse()?,
            "--rows" => rows = args.next().ok_or("missing --rows value")?.parse()?,
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }
    std::fs::create_dir_all(&out_dir)?;

    let engine = GenerationEngine::new(Limits::default());
    let client_out = OutputPaths::with_sibling_xlsx(out_dir.join("clientes_ficticios.csv"));
    let client_report = engine.run_clients(
        &ClientConfig {
            count: clients,
            seed: Some(42),
            ..ClientConfig::default()
        },
        &client_out,
    )?;

    let purchase_out = OutputPaths::with_sibling_xlsx(out_dir.join("compras.csv"));
    let purchase_report = engine.run_purchases(
        &PurchaseConfig {
            rows,
            ..PurchaseConfig::default()
        },
        &client_out.csv,
        &purchase_out,
    )?;

    println!("clients={}", client_report.rows_generated);
    println!("purchases={}", purchase_report.rows_generated);
    println!("out_dir={}", out_dir.display());
    Ok(())
}
