//! Proto ↔ Kernel conversion bridge.
//!
//! Converts between the protobuf wire types (proto_types.rs) and the
//! kernel's `PaginationArgs` / `PaginationItem`.
//!
//! Decoding is strict: the request args must be present and valid, every
//! item must carry a kind, every ellipsis a known position, the carried
//! fingerprint must match the items, and the items must be a well-formed
//! sequence for those args.

use prost::Message;
use thiserror::Error;
use tracing::warn;

use pagination_sequence::builder::validate_args;
use pagination_sequence::domain::{
    EllipsisPosition, PaginationArgs, PaginationItem, DEFAULT_EDGES, DEFAULT_NEIGHBORS,
};
use pagination_sequence::error::PaginationError;
use pagination_sequence::hashing::sequence_hash;
use pagination_sequence::invariants::{validate_sequence, InvariantViolation};
use pagination_sequence::SEQUENCE_FORMAT_VERSION;

use crate::proto_types::*;

/// All possible wire decode failures.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("DecodeError: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("UnsupportedFormatVersion: expected {expected}, got {found}")]
    UnsupportedFormatVersion { expected: u32, found: u32 },

    #[error("MissingKind: item {index} has neither page nor ellipsis")]
    MissingKind { index: usize },

    #[error("UnknownEllipsisPosition: item {index} has position value {value}")]
    UnknownEllipsisPosition { index: usize, value: i32 },

    #[error("MissingArgs: sequence carries no pagination request")]
    MissingArgs,

    #[error("InvalidArgs: {0}")]
    InvalidArgs(#[from] PaginationError),

    #[error("FingerprintMismatch: carried {carried}, recomputed {recomputed}")]
    FingerprintMismatch { carried: String, recomputed: String },

    #[error("InvariantViolation: {0}")]
    Invariant(#[from] InvariantViolation),
}

// ── Args ───────────────────────────────────────────────────────

pub fn args_to_proto(args: &PaginationArgs) -> ProtoPaginationArgs {
    ProtoPaginationArgs {
        page: args.page,
        pages: args.pages,
        edges: Some(args.edges),
        neighbors: Some(args.neighbors),
    }
}

/// Absent display parameters fall back to the kernel defaults.
pub fn proto_to_args(proto: &ProtoPaginationArgs) -> PaginationArgs {
    PaginationArgs {
        page: proto.page,
        pages: proto.pages,
        edges: proto.edges.unwrap_or(DEFAULT_EDGES),
        neighbors: proto.neighbors.unwrap_or(DEFAULT_NEIGHBORS),
    }
}

// ── Items ──────────────────────────────────────────────────────

pub fn item_to_proto(item: &PaginationItem) -> ProtoPaginationItem {
    let kind = match item {
        PaginationItem::Page { page } => ItemKind::Page(*page),
        PaginationItem::Ellipsis { position } => {
            let p = match position {
                EllipsisPosition::Start => ProtoEllipsisPosition::Start,
                EllipsisPosition::End => ProtoEllipsisPosition::End,
            };
            ItemKind::Ellipsis(p as i32)
        }
    };
    ProtoPaginationItem { kind: Some(kind) }
}

/// `index` is the item's position in its sequence, for error reporting.
pub fn proto_to_item(
    proto: &ProtoPaginationItem,
    index: usize,
) -> Result<PaginationItem, BridgeError> {
    let kind = proto
        .kind
        .as_ref()
        .ok_or(BridgeError::MissingKind { index })?;

    match kind {
        ItemKind::Page(page) => Ok(PaginationItem::page(*page)),
        ItemKind::Ellipsis(value) => match ProtoEllipsisPosition::try_from(*value) {
            Ok(ProtoEllipsisPosition::Start) => {
                Ok(PaginationItem::ellipsis(EllipsisPosition::Start))
            }
            Ok(ProtoEllipsisPosition::End) => Ok(PaginationItem::ellipsis(EllipsisPosition::End)),
            Ok(ProtoEllipsisPosition::Unspecified) | Err(_) => {
                Err(BridgeError::UnknownEllipsisPosition {
                    index,
                    value: *value,
                })
            }
        },
    }
}

// ── Sequence ───────────────────────────────────────────────────

/// Wrap a kernel sequence for the wire, stamping its fingerprint.
pub fn sequence_to_proto(
    args: &PaginationArgs,
    items: &[PaginationItem],
) -> ProtoPaginationSequence {
    ProtoPaginationSequence {
        format_version: SEQUENCE_FORMAT_VERSION,
        args: Some(args_to_proto(args)),
        items: items.iter().map(item_to_proto).collect(),
        fingerprint: sequence_hash(items),
    }
}

/// Unwrap a wire sequence.
///
///   1. Format version must match the kernel's
///   2. Args must be present and pass the builder's argument checks
///   3. Every item must decode
///   4. Fingerprint must match the decoded items
///   5. The output invariants must hold for the args
pub fn proto_to_sequence(
    proto: &ProtoPaginationSequence,
) -> Result<Vec<PaginationItem>, BridgeError> {
    if proto.format_version != SEQUENCE_FORMAT_VERSION {
        return Err(BridgeError::UnsupportedFormatVersion {
            expected: SEQUENCE_FORMAT_VERSION,
            found: proto.format_version,
        });
    }

    let args = proto
        .args
        .as_ref()
        .map(proto_to_args)
        .ok_or(BridgeError::MissingArgs)?;
    validate_args(&args)?;

    let items = proto
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| proto_to_item(item, index))
        .collect::<Result<Vec<_>, _>>()?;

    let recomputed = sequence_hash(&items);
    if recomputed != proto.fingerprint {
        warn!(
            carried = %proto.fingerprint,
            recomputed = %recomputed,
            "pagination sequence fingerprint mismatch"
        );
        return Err(BridgeError::FingerprintMismatch {
            carried: proto.fingerprint.clone(),
            recomputed,
        });
    }

    validate_sequence(&items, args.pages, args.current_page())?;

    Ok(items)
}

/// Length-free protobuf encoding of a wire sequence.
pub fn encode_sequence(proto: &ProtoPaginationSequence) -> Vec<u8> {
    proto.encode_to_vec()
}

pub fn decode_sequence(bytes: &[u8]) -> Result<ProtoPaginationSequence, BridgeError> {
    Ok(ProtoPaginationSequence::decode(bytes)?)
}
