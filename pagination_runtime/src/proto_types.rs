//! Hand-written protobuf types matching pagination.proto.
//!
//! Uses prost derive macros for encode/decode without prost-build.
//! Field numbers are frozen.
//!
//! ```proto
//! message PaginationArgs {
//!   int64 page = 1;
//!   int64 pages = 2;
//!   optional int64 edges = 3;
//!   optional int64 neighbors = 4;
//! }
//! enum EllipsisPosition { UNSPECIFIED = 0; START = 1; END = 2; }
//! message PaginationItem {
//!   oneof kind { int64 page = 1; EllipsisPosition ellipsis = 2; }
//! }
//! message PaginationSequence {
//!   uint32 format_version = 1;
//!   PaginationArgs args = 2;
//!   repeated PaginationItem items = 3;
//!   string fingerprint = 4;
//! }
//! ```

use prost::Message;

// ── Request ────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct ProtoPaginationArgs {
    #[prost(int64, tag = "1")]
    pub page: i64,
    #[prost(int64, tag = "2")]
    pub pages: i64,
    #[prost(int64, optional, tag = "3")]
    pub edges: Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub neighbors: Option<i64>,
}

// ── Items ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ProtoEllipsisPosition {
    Unspecified = 0,
    Start = 1,
    End = 2,
}

#[derive(Clone, PartialEq, Message)]
pub struct ProtoPaginationItem {
    #[prost(oneof = "ItemKind", tags = "1, 2")]
    pub kind: Option<ItemKind>,
}

#[derive(Clone, PartialEq, prost::Oneof)]
pub enum ItemKind {
    #[prost(int64, tag = "1")]
    Page(i64),
    #[prost(enumeration = "ProtoEllipsisPosition", tag = "2")]
    Ellipsis(i32),
}

// ── Sequence ───────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct ProtoPaginationSequence {
    #[prost(uint32, tag = "1")]
    pub format_version: u32,
    #[prost(message, optional, tag = "2")]
    pub args: Option<ProtoPaginationArgs>,
    #[prost(message, repeated, tag = "3")]
    pub items: Vec<ProtoPaginationItem>,
    #[prost(string, tag = "4")]
    pub fingerprint: String,
}
