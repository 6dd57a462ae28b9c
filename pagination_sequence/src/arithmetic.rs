/// Pagination Kernel — Arithmetic Primitives
///
/// All quantities are i64. No float: `half = length / 2` is never
/// materialized, only its floor and ceiling (length is always odd).

use crate::error::PaginationError;

/// `2 * value + offset`, checked. Overflow is reported against the
/// request field `field` with its original `value`.
pub fn checked_span(value: i64, offset: i64, field: &'static str) -> Result<i64, PaginationError> {
    value
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_add(offset))
        .ok_or_else(|| PaginationError::invalid(field, value, "too large, i64 overflow"))
}

/// Minimum slot count below which nothing collapses:
/// current page + 2 neighbor runs + 2 edge runs + 2 ellipsis slots.
///
/// `1 + 2*neighbors + 2*edges + 2`
pub fn window_length(edges: i64, neighbors: i64) -> Result<i64, PaginationError> {
    let with_neighbors = checked_span(neighbors, 3, "neighbors")?;
    checked_span(edges, with_neighbors, "edges")
}

/// `floor(length / 2)`.
pub fn half_floor(length: i64) -> i64 {
    length / 2
}

/// `ceil(length / 2)` for a non-negative length.
pub fn half_ceil(length: i64) -> i64 {
    length / 2 + length % 2
}
