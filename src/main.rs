//! Command-line interface for sales-datagen
//!
//! # Usage Examples
//!
//! ```bash
//! # One million rows into ./sales_data.csv
//! sales-datagen
//!
//! # Reproducible fixture
//! sales-datagen --rows 3 --seed 42 --output fixture.csv
//!
//! # Top up an existing file with a weighted random number of rows
//! sales-datagen --append --output sales_data.csv
//!
//! # Custom value ranges
//! sales-datagen --config ranges.yaml --rows 1000
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress logs on stderr.

use clap::Parser;
use sales_datagen::{run_generate, SalesPopulateArgs};

#[derive(Parser)]
#[command(name = "sales-datagen")]
#[command(about = "Generate synthetic sales records and write them as CSV")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: SalesPopulateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let summary = run_generate(&cli.args)?;

    println!(
        "Generated {} rows of sales data and saved to {} in {:?}",
        summary.metrics.rows_written,
        summary.output.display(),
        summary.elapsed
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sales-datagen"]).unwrap();

        assert_eq!(cli.args.output, PathBuf::from("sales_data.csv"));
        assert_eq!(cli.args.rows, None);
        assert_eq!(cli.args.seed, None);
        assert!(!cli.args.append);
        assert!(cli.args.config.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "sales-datagen",
            "-o",
            "out.csv",
            "-n",
            "3",
            "--seed",
            "42",
            "--append",
            "--config",
            "ranges.yaml",
        ])
        .unwrap();

        assert_eq!(cli.args.output, PathBuf::from("out.csv"));
        assert_eq!(cli.args.rows, Some(3));
        assert_eq!(cli.args.seed, Some(42));
        assert!(cli.args.append);
        assert_eq!(cli.args.config, Some(PathBuf::from("ranges.yaml")));
    }

    #[test]
    fn test_cli_rejects_negative_rows() {
        assert!(Cli::try_parse_from(["sales-datagen", "--rows", "-1"]).is_err());
    }
}
