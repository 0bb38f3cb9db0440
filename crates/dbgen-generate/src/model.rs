use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which dataset a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Clients,
    Purchases,
}

/// A file written by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub kind: DatasetKind,
    pub seed: u64,
    pub rows_requested: u64,
    pub rows_generated: u64,
    /// Size of the input client set (purchases) or of the output (clients).
    pub clients: u64,
    pub baseline_rows: u64,
    pub remainder_rows: u64,
    /// Set when the requested row count was raised to cover every client.
    pub rows_adjusted: bool,
    pub outputs: Vec<OutputFile>,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(kind: DatasetKind, seed: u64) -> Self {
        Self {
            kind,
            seed,
            rows_requested: 0,
            rows_generated: 0,
            clients: 0,
            baseline_rows: 0,
            remainder_rows: 0,
            rows_adjusted: false,
            outputs: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_output(&mut self, path: PathBuf, bytes: u64) {
        self.outputs.push(OutputFile { path, bytes });
    }

    pub fn bytes_written(&self) -> u64 {
        self.outputs.iter().map(|output| output.bytes).sum()
    }
}
