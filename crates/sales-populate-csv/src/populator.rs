//! CSV writer for assembled sales rows.

use crate::error::PopulateError;
use csv::{Terminator, WriterBuilder};
use sales_generator::{NameSource, SalesGenerator};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How the output file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing content.
    #[default]
    Truncate,
    /// Add rows after existing content; the header is written only into an
    /// empty file.
    Append,
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes after the write.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes header-first row sequences as comma-separated text.
#[derive(Debug, Clone, Default)]
pub struct CsvPopulator {
    mode: WriteMode,
}

impl CsvPopulator {
    /// Create a writer that truncates the destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how the destination is opened.
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Write `rows` to `output_path`.
    ///
    /// The first row is the header. Fields containing the delimiter, quotes
    /// or line breaks are quoted; every row ends with `\r\n`. The file handle is
    /// released on every path; on success it is flushed first so late write
    /// errors are reported.
    pub fn write_rows<P: AsRef<Path>>(
        &self,
        output_path: P,
        rows: &[Vec<String>],
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_path = output_path.as_ref();

        let (file, write_header) = match self.mode {
            WriteMode::Truncate => (File::create(output_path)?, true),
            WriteMode::Append => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(output_path)?;
                let is_empty = file.metadata()?.len() == 0;
                (file, is_empty)
            }
        };

        info!(
            "Writing {} rows to CSV file '{}' ({:?})",
            rows.len().saturating_sub(1),
            output_path.display(),
            self.mode
        );

        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(buf_writer);

        if let Some((header, data)) = rows.split_first() {
            if write_header {
                writer.write_record(header)?;
            }

            for row in data {
                writer.write_record(row)?;
                metrics.rows_written += 1;

                if metrics.rows_written % 100_000 == 0 {
                    debug!("Written {} rows", metrics.rows_written);
                }
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Assemble `count` records from `generator` and write them.
    pub fn populate<P, R, N>(
        &self,
        generator: &mut SalesGenerator<R, N>,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError>
    where
        P: AsRef<Path>,
        R: rand::Rng,
        N: NameSource,
    {
        let rows = generator.assemble(count);
        self.write_rows(output_path, &rows)
    }
}
