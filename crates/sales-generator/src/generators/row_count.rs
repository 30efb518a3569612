//! Weighted row count for top-up runs.

use rand::Rng;

/// Draw a row count skewed towards small batches.
///
/// | chance | range      |
/// |--------|------------|
/// | 50%    | 1..=10     |
/// | 30%    | 1..=100    |
/// | 15%    | 1..=1000   |
/// | 5%     | 1..=10000  |
pub fn weighted_row_count<R: Rng>(rng: &mut R) -> u64 {
    let bucket = rng.random_range(1..=100u32);
    let max = match bucket {
        1..=50 => 10,
        51..=80 => 100,
        81..=95 => 1_000,
        _ => 10_000,
    };
    rng.random_range(1..=max)
}
