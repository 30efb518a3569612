//! The sales record data model.

use crate::money::format_money;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Column names, in output order.
pub const HEADER: [&str; 10] = [
    "Product", "Price", "Quantity", "Total", "Discount", "Tax", "Shipping", "Profit", "Customer",
    "Date",
];

/// Output format for the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Independently drawn money fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charges {
    /// Unit price, two places
    pub price: Decimal,
    /// Units sold
    pub quantity: u32,
    /// Discount applied to the order
    pub discount: Decimal,
    /// Tax charged on the order
    pub tax: Decimal,
    /// Shipping charged on the order
    pub shipping: Decimal,
}

impl Charges {
    /// Price multiplied by quantity.
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Total minus discount, tax and shipping.
    pub fn profit(&self) -> Decimal {
        self.total() - self.discount - self.tax - self.shipping
    }
}

/// One synthetic sales transaction.
///
/// `total` and `profit` are derived from the charges at construction and the
/// record is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub product: String,
    pub price: Decimal,
    pub quantity: u32,
    pub total: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub profit: Decimal,
    pub customer: String,
    pub date: NaiveDate,
}

impl SalesRecord {
    /// Create a record, computing the derived fields from `charges`.
    pub fn new(product: String, customer: String, date: NaiveDate, charges: Charges) -> Self {
        Self {
            product,
            price: charges.price,
            quantity: charges.quantity,
            total: charges.total(),
            discount: charges.discount,
            tax: charges.tax,
            shipping: charges.shipping,
            profit: charges.profit(),
            customer,
            date,
        }
    }

    /// Format the record as text fields in [`HEADER`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.product.clone(),
            format_money(self.price),
            self.quantity.to_string(),
            format_money(self.total),
            format_money(self.discount),
            format_money(self.tax),
            format_money(self.shipping),
            format_money(self.profit),
            self.customer.clone(),
            self.date.format(DATE_FORMAT).to_string(),
        ]
    }

    /// The header as an owned row.
    pub fn header_row() -> Vec<String> {
        HEADER.iter().map(|s| s.to_string()).collect()
    }
}
