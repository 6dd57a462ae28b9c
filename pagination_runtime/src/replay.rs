//! Rebuild orchestrator — sequence and fingerprint in one call.
//!
//! Delegates all layout logic to the kernel.

use pagination_sequence::builder::build;
use pagination_sequence::domain::{PaginationArgs, PaginationItem};
use pagination_sequence::error::PaginationError;
use pagination_sequence::hashing::sequence_hash;

/// Build the sequence for `args` and return it with its canonical hash.
pub fn rebuild(args: &PaginationArgs) -> Result<(Vec<PaginationItem>, String), PaginationError> {
    let items = build(args)?;
    let hash = sequence_hash(&items);
    Ok((items, hash))
}

/// Rebuild and return only the canonical hash.
pub fn rebuild_hash(args: &PaginationArgs) -> Result<String, PaginationError> {
    let (_, hash) = rebuild(args)?;
    Ok(hash)
}
