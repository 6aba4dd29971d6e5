use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::open_sink;
use crate::synth::synthesize;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for streaming a full dataset to disk.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Write the header and every batch, then report on the finished run.
    ///
    /// Any sink failure aborts immediately; rows already flushed stay on
    /// disk.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        if self.options.batch_size == 0 {
            return Err(GenerationError::InvalidOptions(
                "batch_size must be greater than zero".to_string(),
            ));
        }

        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        info!(
            run_id = %run_id,
            rows = self.options.total_rows,
            batch_size = self.options.batch_size,
            seed = self.options.seed,
            out = %self.options.out_path.display(),
            "generation started"
        );

        let mut writer = open_sink(&self.options.out_path)?;
        let (rows_written, batches_written) = stream_batches(
            &mut writer,
            self.options.total_rows,
            self.options.batch_size,
            &mut rng,
        )?;

        writer.flush()?;
        let counting = writer.into_inner().map_err(|err| err.into_error())?;
        let bytes_written = counting.bytes_written();

        let elapsed = start.elapsed();
        let report = GenerationReport {
            run_id: run_id.clone(),
            rows_written,
            batches_written,
            bytes_written,
            duration_ms: elapsed.as_millis() as u64,
            throughput_bytes_per_sec: if elapsed.as_secs_f64() > 0.0 {
                bytes_written as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            },
        };

        info!(
            run_id = %run_id,
            rows_written = report.rows_written,
            batches = report.batches_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_path: self.options.out_path.clone(),
            report,
        })
    }
}

/// Drive the synthesizer across `total_rows` in `batch_size` chunks.
///
/// At most `batch_size` records are alive at any point; row indices start at
/// 1 and advance in strict order, so batching never changes the draw
/// sequence for a given RNG state.
fn stream_batches<W: Write>(
    writer: &mut csv::Writer<W>,
    total_rows: u64,
    batch_size: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(u64, u64), GenerationError> {
    let mut rows_written = 0_u64;
    let mut batches_written = 0_u64;

    while rows_written < total_rows {
        let n = (total_rows - rows_written).min(batch_size as u64);
        let mut batch = Vec::with_capacity(n as usize);
        for offset in 0..n {
            batch.push(synthesize(rows_written + offset + 1, rng));
        }

        for record in &batch {
            writer.write_record(record.to_fields())?;
        }
        writer.flush()?;

        rows_written += n;
        batches_written += 1;
        info!(rows_written, total_rows, "batch written");
    }

    Ok((rows_written, batches_written))
}
