//! CSV writer for synthetic sales data.
//!
//! This crate serializes rows assembled by the sales-generator crate to a
//! delimited text file.
//!
//! # Example
//!
//! ```ignore
//! use sales_core::GeneratorSettings;
//! use sales_generator::SalesGenerator;
//! use sales_populate_csv::CsvPopulator;
//!
//! let mut generator = SalesGenerator::new(GeneratorSettings::default(), Some(42));
//! let rows = generator.assemble(1000);
//!
//! let metrics = CsvPopulator::new().write_rows("sales_data.csv", &rows)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{SalesPopulateArgs, DEFAULT_OUTPUT, DEFAULT_ROW_COUNT};
pub use error::PopulateError;
pub use populator::{CsvPopulator, PopulateMetrics, WriteMode};
