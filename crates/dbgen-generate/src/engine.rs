use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use dbgen_core::{ClientConfig, Limits, PurchaseConfig};

use crate::allocator::effective_rows;
use crate::clients::ClientGenerator;
use crate::errors::GenerationError;
use crate::input::read_client_ids_from_path;
use crate::model::{DatasetKind, GenerationReport};
use crate::output::csv::write_csv_file;
use crate::output::{
    check_sheet_capacity, write_clients_csv, write_clients_xlsx, write_purchases_csv,
    write_purchases_xlsx,
};
use crate::purchases::PurchaseGenerator;
use crate::random::{fresh_seed, seeded_rng};

/// Destination files for one dataset.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub xlsx: Option<PathBuf>,
}

impl OutputPaths {
    /// CSV at `csv`, spreadsheet next to it with the `.xlsx` extension.
    pub fn with_sibling_xlsx(csv: impl Into<PathBuf>) -> Self {
        let csv = csv.into();
        let xlsx = Some(csv.with_extension("xlsx"));
        Self { csv, xlsx }
    }
}

/// Entry point for producing datasets on disk.
///
/// Every input is validated and every row generated before the first file is
/// created.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    limits: Limits,
}

impl GenerationEngine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn run_clients(
        &self,
        config: &ClientConfig,
        out: &OutputPaths,
    ) -> Result<GenerationReport, GenerationError> {
        let start = Instant::now();
        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut config = config.clone();
        config.seed = Some(seed);
        config.validate(&self.limits)?;
        if out.xlsx.is_some() {
            check_sheet_capacity(usize::try_from(config.count).unwrap_or(usize::MAX))?;
        }

        info!(count = config.count, seed, "client generation started");
        let generator = ClientGenerator::new(config, self.limits.clone());
        let mut rng = seeded_rng(seed);
        let records = generator.generate(&mut rng)?;

        let mut report = GenerationReport::new(DatasetKind::Clients, seed);
        report.rows_requested = generator.config().count;
        report.rows_generated = records.len() as u64;
        report.clients = records.len() as u64;
        report.baseline_rows = records.len() as u64;

        let bytes = write_csv_file(&out.csv, |writer| write_clients_csv(writer, &records))?;
        report.record_output(out.csv.clone(), bytes);
        if let Some(xlsx) = &out.xlsx {
            write_clients_xlsx(xlsx, &records)?;
            report.record_output(xlsx.clone(), file_len(xlsx)?);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            rows_generated = report.rows_generated,
            bytes_written = report.bytes_written(),
            duration_ms = report.duration_ms,
            "client generation completed"
        );
        Ok(report)
    }

    pub fn run_purchases(
        &self,
        config: &PurchaseConfig,
        clients_csv: &Path,
        out: &OutputPaths,
    ) -> Result<GenerationReport, GenerationError> {
        let start = Instant::now();
        config.validate(&self.limits)?;
        let client_ids = read_client_ids_from_path(clients_csv)?;
        if out.xlsx.is_some() {
            check_sheet_capacity(effective_rows(config.rows, client_ids.len())?)?;
        }

        info!(
            clients = client_ids.len(),
            rows = config.rows,
            seed = config.seed,
            "purchase generation started"
        );
        let generator = PurchaseGenerator::new(config.clone(), self.limits.clone());
        let batch = generator.generate(&client_ids)?;

        let mut report = GenerationReport::new(DatasetKind::Purchases, config.seed);
        report.rows_requested = batch.summary.rows_requested;
        report.rows_generated = batch.summary.rows_generated as u64;
        report.clients = batch.summary.clients as u64;
        report.baseline_rows = batch.summary.baseline_rows() as u64;
        report.remainder_rows = batch.summary.remainder_rows() as u64;
        report.rows_adjusted = batch.summary.rows_adjusted();

        let bytes = write_csv_file(&out.csv, |writer| write_purchases_csv(writer, &batch.records))?;
        report.record_output(out.csv.clone(), bytes);
        if let Some(xlsx) = &out.xlsx {
            write_purchases_xlsx(xlsx, &batch.records)?;
            report.record_output(xlsx.clone(), file_len(xlsx)?);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            rows_generated = report.rows_generated,
            rows_adjusted = report.rows_adjusted,
            bytes_written = report.bytes_written(),
            duration_ms = report.duration_ms,
            "purchase generation completed"
        );
        Ok(report)
    }
}

fn file_len(path: &Path) -> Result<u64, GenerationError> {
    Ok(std::fs::metadata(path)?.len())
}
