//! Record assembler producing sales rows.

use crate::generators::{
    generate_customer, generate_date, generate_discount, generate_price, generate_product,
    generate_quantity, generate_shipping, generate_tax, text::FakeNames, text::NameSource,
    weighted_row_count,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sales_core::{Charges, GeneratorSettings, SalesRecord};

/// Upper bound on the rows reserved up front by [`SalesGenerator::assemble`].
const MAX_PREALLOCATED_ROWS: usize = 1 << 20;

/// Generator that assembles synthetic sales records.
///
/// The RNG is owned by the generator rather than shared process-wide, so a
/// seeded generator reproduces identical output.
pub struct SalesGenerator<R = StdRng, N = FakeNames> {
    /// Value ranges and date window
    settings: GeneratorSettings,
    /// Exclusive end of the date window, fixed at construction
    end_date: NaiveDate,
    /// Random source
    rng: R,
    /// Word and person-name source
    names: N,
    /// Number of records generated so far
    index: u64,
}

impl SalesGenerator<StdRng, FakeNames> {
    /// Create a generator backed by `StdRng` and the `fake` name source.
    ///
    /// `seed` takes precedence over `settings.seed`; with neither, the RNG is
    /// seeded from the OS and output is not reproducible.
    pub fn new(settings: GeneratorSettings, seed: Option<u64>) -> Self {
        let rng = match seed.or(settings.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(settings, rng, FakeNames)
    }
}

impl<R: Rng, N: NameSource> SalesGenerator<R, N> {
    /// Create a generator from an explicit RNG and name source.
    pub fn with_rng(settings: GeneratorSettings, rng: R, names: N) -> Self {
        let end_date = settings.resolved_end_date();
        Self {
            settings,
            end_date,
            rng,
            names,
            index: 0,
        }
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate the next record.
    ///
    /// Fields are drawn in column order; Total and Profit are derived.
    pub fn next_record(&mut self) -> SalesRecord {
        let product = generate_product(&self.names, &mut self.rng);
        let price = generate_price(&mut self.rng, &self.settings);
        let quantity = generate_quantity(&mut self.rng, self.settings.quantity);
        let discount = generate_discount(&mut self.rng, &self.settings);
        let tax = generate_tax(&mut self.rng, &self.settings);
        let shipping = generate_shipping(&mut self.rng, &self.settings);
        let customer = generate_customer(&self.names, &mut self.rng);
        let date = generate_date(&mut self.rng, self.settings.start_date, self.end_date);

        self.index += 1;

        SalesRecord::new(
            product,
            customer,
            date,
            Charges {
                price,
                quantity,
                discount,
                tax,
                shipping,
            },
        )
    }

    /// Generate multiple records.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_, R, N> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Assemble the header followed by `count` formatted data rows.
    pub fn assemble(&mut self, count: u64) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(row_capacity(count));
        rows.push(SalesRecord::header_row());
        rows.extend(self.records(count).map(|record| record.to_row()));
        rows
    }

    /// Draw a row count for a top-up run.
    pub fn weighted_row_count(&mut self) -> u64 {
        weighted_row_count(&mut self.rng)
    }
}

/// Rows to reserve for a header plus `count` records, capped so an absurd
/// count cannot overflow or over-allocate up front.
fn row_capacity(count: u64) -> usize {
    usize::try_from(count)
        .ok()
        .and_then(|n| n.checked_add(1))
        .map_or(MAX_PREALLOCATED_ROWS, |n| n.min(MAX_PREALLOCATED_ROWS))
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a, R, N> {
    generator: &'a mut SalesGenerator<R, N>,
    remaining: u64,
}

impl<R: Rng, N: NameSource> Iterator for RecordIterator<'_, R, N> {
    type Item = SalesRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng, N: NameSource> ExactSizeIterator for RecordIterator<'_, R, N> {}
