//! Generate command runner.

use anyhow::Context;
use sales_core::GeneratorSettings;
use sales_generator::SalesGenerator;
use sales_populate_csv::{
    CsvPopulator, PopulateMetrics, SalesPopulateArgs, WriteMode, DEFAULT_ROW_COUNT,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Data rows requested (header excluded)
    pub row_count: u64,
    /// File that was written
    pub output: PathBuf,
    /// Writer metrics
    pub metrics: PopulateMetrics,
    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

/// Generate sales records and write them to `args.output`.
pub fn run_generate(args: &SalesPopulateArgs) -> anyhow::Result<GenerateSummary> {
    let start = Instant::now();

    let settings = match &args.config {
        Some(path) => GeneratorSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {path:?}"))?,
        None => GeneratorSettings::default(),
    };

    let mut generator = SalesGenerator::new(settings, args.seed);
    let row_count = resolve_row_count(args, &mut generator);
    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Truncate
    };

    tracing::info!(
        "Generating {} sales rows (seed={:?}, mode={:?})",
        row_count,
        args.seed.or(generator.settings().seed),
        mode
    );

    let rows = generator.assemble(row_count);
    let metrics = CsvPopulator::new()
        .with_mode(mode)
        .write_rows(&args.output, &rows)
        .with_context(|| format!("Failed to write sales data to {}", args.output.display()))?;

    Ok(GenerateSummary {
        row_count,
        output: args.output.clone(),
        metrics,
        elapsed: start.elapsed(),
    })
}

/// An explicit row count wins; a top-up run against an existing file draws a
/// weighted count; otherwise the default applies.
fn resolve_row_count(args: &SalesPopulateArgs, generator: &mut SalesGenerator) -> u64 {
    match args.rows {
        Some(rows) => rows,
        None if args.append && args.output.exists() => {
            let rows = generator.weighted_row_count();
            tracing::info!(
                "Appending to existing file {}: drew {} rows",
                args.output.display(),
                rows
            );
            rows
        }
        None => DEFAULT_ROW_COUNT,
    }
}
