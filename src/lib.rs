//! sales-datagen - Synthetic sales data generator
//!
//! Generates sales records with randomized product, price, quantity, charges,
//! customer and date fields, derives Total and Profit, and writes the result
//! as a CSV file.
//!
//! The pipeline is strictly linear:
//!
//! ```text
//! settings → SalesGenerator::assemble → CsvPopulator::write_rows → summary
//! ```

pub mod generate;

pub use generate::{run_generate, GenerateSummary};
pub use sales_core::{GeneratorSettings, SalesRecord};
pub use sales_generator::SalesGenerator;
pub use sales_populate_csv::{CsvPopulator, SalesPopulateArgs, WriteMode};
