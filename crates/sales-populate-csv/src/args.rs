//! CLI argument definitions for the sales data generator.

use clap::Args;
use std::path::PathBuf;

/// Default number of data rows.
pub const DEFAULT_ROW_COUNT: u64 = 1_000_000;

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "sales_data.csv";

/// Arguments controlling what is generated and where it is written.
#[derive(Args, Clone, Debug)]
pub struct SalesPopulateArgs {
    /// Output CSV file
    #[arg(long, short = 'o', env = "SALES_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of data rows to generate (default: 1000000, or a weighted
    /// random count when appending to an existing file)
    #[arg(long, short = 'n', env = "SALES_ROWS")]
    pub rows: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "SALES_SEED")]
    pub seed: Option<u64>,

    /// Append to the output file instead of truncating it; the header is only
    /// written when the file is empty
    #[arg(long)]
    pub append: bool,

    /// Path to a YAML file overriding value ranges and the date window
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl SalesPopulateArgs {
    /// Arguments with every option at its default, writing to `output`.
    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            rows: None,
            seed: None,
            append: false,
            config: None,
        }
    }
}
