//! Sales record generator.
//!
//! This crate provides the [`SalesGenerator`] which assembles synthetic sales
//! records from independent random draws. The generator owns its RNG, so a
//! fixed seed reproduces the same records on every run.
//!
//! # Architecture
//!
//! ```text
//! GeneratorSettings (YAML / defaults)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  SalesGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - names         │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    SalesRecord { product, price, quantity, total, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use sales_core::GeneratorSettings;
//! use sales_generator::SalesGenerator;
//!
//! let mut generator = SalesGenerator::new(GeneratorSettings::default(), Some(42));
//! let rows = generator.assemble(3);
//! assert_eq!(rows.len(), 4);
//! assert_eq!(rows[0][0], "Product");
//! ```
//!
//! # Generators
//!
//! - `generate_product` / `generate_customer` - Word and person name from a [`NameSource`]
//! - `generate_price`, `generate_discount`, `generate_tax`, `generate_shipping` - Two-place decimals
//! - `generate_quantity` - Integer in a range
//! - `generate_date` - Calendar day in a window
//! - `weighted_row_count` - Row count for top-up runs

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{RecordIterator, SalesGenerator};
pub use generators::text::{FakeNames, NameSource};
