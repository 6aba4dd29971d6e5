use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use incidentforge_core::FIELD_NAMES;

use crate::errors::GenerationError;

/// Open the output file as a CSV writer and emit the header row.
///
/// The returned writer counts every byte that reaches the sink so the run
/// report can include the output size.
pub fn open_sink(
    path: &Path,
) -> Result<csv::Writer<CountingWriter<BufWriter<File>>>, GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);
    writer.write_record(FIELD_NAMES)?;
    Ok(writer)
}

pub struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
