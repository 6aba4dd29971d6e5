use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Path of the delimited output file.
    pub out_path: PathBuf,
    /// Number of data rows to write.
    pub total_rows: u64,
    /// Rows synthesized and flushed per batch; bounds memory use.
    pub batch_size: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("incidents_10M.csv"),
            total_rows: 10_000_000,
            batch_size: 100_000,
            seed: None,
        }
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub rows_written: u64,
    pub batches_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub throughput_bytes_per_sec: f64,
}
