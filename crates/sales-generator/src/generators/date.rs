//! Calendar date generator.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Generate a random day in `[start, end)`.
///
/// Returns `start` when the window holds no days.
pub fn generate_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let days = (end - start).num_days();
    if days <= 0 {
        return start;
    }

    let offset = rng.random_range(0..days) as u64;
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}
