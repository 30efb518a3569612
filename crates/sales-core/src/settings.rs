//! Generator settings loaded from YAML.
//!
//! Every field has a default, so an empty document (or no file at all)
//! yields the stock value ranges:
//!
//! ```yaml
//! price:    { min: 1.0, max: 999.9 }
//! quantity: { min: 1, max: 100 }
//! discount: { min: 0.0, max: 85.0 }
//! tax:      { min: 0.0, max: 3.0 }
//! shipping: { min: 0.0, max: 5.0 }
//! start_date: 2010-01-01
//! end_date: ~        # today (local time) when omitted
//! seed: ~
//! ```

use crate::money::round_to_cents;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Error reading settings file
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A range is empty, negative or not finite
    #[error("Invalid range for '{field}': min={min}, max={max}")]
    InvalidRange {
        field: &'static str,
        min: String,
        max: String,
    },

    /// The date window ends before it starts
    #[error("Invalid date window: end_date {end} is before start_date {start}")]
    InvalidDate { start: NaiveDate, end: NaiveDate },
}

/// Inclusive range for a two-place money field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MoneyRange {
    pub min: f64,
    pub max: f64,
}

impl MoneyRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound in whole cents.
    pub fn min_cents(&self) -> i64 {
        round_to_cents(self.min)
    }

    /// Upper bound in whole cents.
    pub fn max_cents(&self) -> i64 {
        round_to_cents(self.max)
    }

    fn validate(&self, field: &'static str) -> Result<(), SettingsError> {
        if self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
        {
            Ok(())
        } else {
            Err(SettingsError::InvalidRange {
                field,
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

/// Inclusive range for the quantity field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.min >= 1 && self.min <= self.max {
            Ok(())
        } else {
            Err(SettingsError::InvalidRange {
                field: "quantity",
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default()
}

/// Value ranges and date window for record generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorSettings {
    pub price: MoneyRange,
    pub quantity: QuantityRange,
    pub discount: MoneyRange,
    pub tax: MoneyRange,
    pub shipping: MoneyRange,

    /// First day that can be drawn
    pub start_date: NaiveDate,

    /// Exclusive end of the date window; `None` means today in local time
    pub end_date: Option<NaiveDate>,

    /// Seed for the random source; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            price: MoneyRange::new(1.0, 999.9),
            quantity: QuantityRange::new(1, 100),
            discount: MoneyRange::new(0.0, 85.0),
            tax: MoneyRange::new(0.0, 3.0),
            shipping: MoneyRange::new(0.0, 5.0),
            start_date: default_start_date(),
            end_date: None,
            seed: None,
        }
    }
}

impl GeneratorSettings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string and validate them.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let settings: GeneratorSettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every range is non-empty and the date window is ordered.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.price.validate("price")?;
        self.quantity.validate()?;
        self.discount.validate("discount")?;
        self.tax.validate("tax")?;
        self.shipping.validate("shipping")?;

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(SettingsError::InvalidDate {
                    start: self.start_date,
                    end,
                });
            }
        }

        Ok(())
    }

    /// The exclusive end of the date window, resolving `None` to today's
    /// local date.
    pub fn resolved_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.price.min_cents(), 100);
        assert_eq!(settings.price.max_cents(), 99990);
        assert_eq!(settings.quantity, QuantityRange::new(1, 100));
        assert_eq!(settings.discount.max_cents(), 8500);
        assert_eq!(settings.tax.max_cents(), 300);
        assert_eq!(settings.shipping.max_cents(), 500);
        assert_eq!(
            settings.start_date,
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
        );
        assert!(settings.end_date.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_end_date_defaults_to_local_today() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.resolved_end_date(), Local::now().date_naive());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let settings = GeneratorSettings::from_yaml("{}").unwrap();
        assert_eq!(settings, GeneratorSettings::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
price:
  min: 5.0
  max: 50.0
start_date: 2020-06-01
end_date: 2021-06-01
seed: 7
"#;
        let settings = GeneratorSettings::from_yaml(yaml).unwrap();
        assert_eq!(settings.price, MoneyRange::new(5.0, 50.0));
        assert_eq!(settings.quantity, QuantityRange::new(1, 100));
        assert_eq!(
            settings.start_date,
            NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
        );
        assert_eq!(
            settings.resolved_end_date(),
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()
        );
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_invalid_money_range() {
        let yaml = r#"
tax:
  min: 3.0
  max: 1.0
"#;
        let err = GeneratorSettings::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidRange { field: "tax", .. }
        ));
    }

    #[test]
    fn test_negative_money_range() {
        let mut settings = GeneratorSettings::default();
        settings.shipping = MoneyRange::new(-1.0, 5.0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidRange {
                field: "shipping",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut settings = GeneratorSettings::default();
        settings.quantity = QuantityRange::new(0, 10);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_inverted_date_window() {
        let yaml = r#"
start_date: 2020-01-01
end_date: 2019-01-01
"#;
        let err = GeneratorSettings::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidDate { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = GeneratorSettings::from_yaml("price: [1, 2").unwrap_err();
        assert!(matches!(err, SettingsError::YamlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quantity:\n  min: 2\n  max: 3").unwrap();

        let settings = GeneratorSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.quantity, QuantityRange::new(2, 3));
    }

    #[test]
    fn test_missing_file() {
        let err = GeneratorSettings::from_file("/nonexistent/settings.yaml").unwrap_err();
        assert!(matches!(err, SettingsError::IoError(_)));
    }
}
