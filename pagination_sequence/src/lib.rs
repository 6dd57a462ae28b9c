#![forbid(unsafe_code)]

/// Canonical sequence format v1. Changing the serialized shape requires v2.
pub const SEQUENCE_FORMAT_VERSION: u32 = 1;

pub mod arithmetic;
pub mod error;
pub mod domain;
pub mod range;
pub mod builder;
pub mod invariants;
pub mod hashing;
pub mod render;
pub mod fixtures;
