//! Individual field generators.
//!
//! Each generator performs one independent draw from the RNG it is handed.
//! None of them can fail once the settings have been validated.

pub mod date;
pub mod numeric;
pub mod row_count;
pub mod text;

pub use date::generate_date;
pub use numeric::{
    generate_discount, generate_money, generate_price, generate_quantity, generate_shipping,
    generate_tax,
};
pub use row_count::weighted_row_count;
pub use text::{generate_customer, generate_product};
