//! Core types for the sales-datagen generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the CSV writer:
//!
//! - [`SalesRecord`] - One synthetic sales transaction (10 fields)
//! - [`Charges`] - The independently drawn money fields of a record
//! - [`GeneratorSettings`] - Value ranges and date window, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! sales-core (this crate)
//!    │
//!    ├─── sales-generator     (draws SalesRecords from GeneratorSettings)
//!    │
//!    └─── sales-populate-csv  (serializes rows to a CSV file)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sales_core::{Charges, SalesRecord, HEADER};
//! use rust_decimal::Decimal;
//!
//! let record = SalesRecord::new(
//!     "lamp".to_string(),
//!     "Jane Doe".to_string(),
//!     chrono::NaiveDate::from_ymd_opt(2020, 5, 17).unwrap(),
//!     Charges {
//!         price: Decimal::new(1250, 2),
//!         quantity: 4,
//!         discount: Decimal::new(300, 2),
//!         tax: Decimal::new(75, 2),
//!         shipping: Decimal::new(199, 2),
//!     },
//! );
//!
//! assert_eq!(HEADER.len(), record.to_row().len());
//! assert_eq!(record.to_row()[3], "50.00");
//! ```

pub mod money;
pub mod record;
pub mod settings;

// Re-exports for convenience
pub use money::{format_money, from_cents, round_to_cents};
pub use record::{Charges, SalesRecord, DATE_FORMAT, HEADER};
pub use settings::{GeneratorSettings, MoneyRange, QuantityRange, SettingsError};
