/// Pagination Kernel — Range Generator
///
/// Inverted bounds produce an empty run, never an error. The builder
/// relies on this for every cluster that collapses to nothing
/// (`edges = 0`).

use std::ops::RangeInclusive;

/// Ascending pages `start..=end`, empty when `start > end`.
pub fn range_inclusive(start: i64, end: i64) -> RangeInclusive<i64> {
    start..=end
}
