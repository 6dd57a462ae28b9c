//! Drift detection — determinism verification and sequence comparison.
//!
//! A drift report says how the visible window moved between two
//! sequences, e.g. before and after the current page changes.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use pagination_sequence::domain::{PaginationArgs, PaginationItem};
use pagination_sequence::error::PaginationError;

use crate::replay;

#[derive(Debug, Error)]
pub enum DeterminismError {
    #[error(transparent)]
    Rejected(#[from] PaginationError),

    #[error("DETERMINISM FAILURE: two builds produced different hashes (run 1: {first}, run 2: {second})")]
    Mismatch { first: String, second: String },
}

/// Build `args` twice and require identical fingerprints.
/// Returns the fingerprint on success.
pub fn verify_determinism(args: &PaginationArgs) -> Result<String, DeterminismError> {
    let first = replay::rebuild_hash(args)?;
    let second = replay::rebuild_hash(args)?;

    if first != second {
        return Err(DeterminismError::Mismatch { first, second });
    }
    Ok(first)
}

/// Structured comparison of two sequences.
pub fn compare_sequences(a: &[PaginationItem], b: &[PaginationItem]) -> DriftReport {
    let pages_a: BTreeSet<i64> = a.iter().filter_map(PaginationItem::as_page).collect();
    let pages_b: BTreeSet<i64> = b.iter().filter_map(PaginationItem::as_page).collect();

    let added: Vec<i64> = pages_b.difference(&pages_a).copied().collect();
    let removed: Vec<i64> = pages_a.difference(&pages_b).copied().collect();
    let retained: Vec<i64> = pages_a.intersection(&pages_b).copied().collect();

    let ellipses_a = a.iter().filter(|i| i.is_ellipsis()).count() as i64;
    let ellipses_b = b.iter().filter(|i| i.is_ellipsis()).count() as i64;

    DriftReport {
        item_count_a: a.len() as i64,
        item_count_b: b.len() as i64,
        ellipsis_count_a: ellipses_a,
        ellipsis_count_b: ellipses_b,
        ellipsis_count_delta: ellipses_b - ellipses_a,
        added_pages: added,
        removed_pages: removed,
        retained_pages: retained,
        identical: a == b,
    }
}

/// Structured drift report. Page lists are ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    pub item_count_a: i64,
    pub item_count_b: i64,
    pub ellipsis_count_a: i64,
    pub ellipsis_count_b: i64,
    pub ellipsis_count_delta: i64,
    pub added_pages: Vec<i64>,
    pub removed_pages: Vec<i64>,
    pub retained_pages: Vec<i64>,
    pub identical: bool,
}

impl DriftReport {
    /// True when the same pages are shown, even if ellipsis placement differs.
    pub fn same_pages(&self) -> bool {
        self.added_pages.is_empty() && self.removed_pages.is_empty()
    }
}
