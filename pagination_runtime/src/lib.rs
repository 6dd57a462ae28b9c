#![forbid(unsafe_code)]

//! Pagination Runtime
//!
//! Wraps the pagination kernel with a protobuf wire form, one-call
//! rebuild + fingerprint, determinism verification and drift reports.
//!
//! No layout logic lives here. Every sequence comes from the kernel.

pub mod proto_types;
pub mod proto_bridge;
pub mod replay;
pub mod drift;
