/// Pagination Kernel — Sequence Builder
///
/// ALL layout decisions live here. Pure function of `PaginationArgs`:
/// no state, no I/O, integer math only.
///
/// Branches, first match wins:
///   Compact   — pages <= length: every page, no ellipsis
///   NearStart — current < half
///   NearEnd   — current > pages - half
///   Middle    — everything else
///
/// `length = 2*neighbors + 2*edges + 3` is odd, so with
/// `h = floor(length / 2)`:
///   current < half          <=>  current <= h
///   current > pages - half  <=>  current >= pages - h

use tracing::{debug, warn};

use crate::arithmetic::{half_ceil, half_floor, window_length};
use crate::domain::{EllipsisPosition, PaginationArgs, PaginationItem};
use crate::error::PaginationError;
use crate::range::range_inclusive;

/// Layout shape chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Compact,
    NearStart,
    NearEnd,
    Middle,
}

/// Validated request plus the quantities every branch reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub pages: i64,
    pub edges: i64,
    pub neighbors: i64,
    pub current: i64,
    pub length: i64,
    pub branch: Branch,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the pagination sequence for `args`.
pub fn build(args: &PaginationArgs) -> Result<Vec<PaginationItem>, PaginationError> {
    let layout = plan(args)?;
    debug!(
        pages = layout.pages,
        current = layout.current,
        edges = layout.edges,
        neighbors = layout.neighbors,
        length = layout.length,
        branch = ?layout.branch,
        "pagination layout selected"
    );

    let items = match layout.branch {
        Branch::Compact => build_compact(&layout),
        Branch::NearStart => build_near_start(&layout),
        Branch::NearEnd => build_near_end(&layout),
        Branch::Middle => build_middle(&layout),
    };
    Ok(items)
}

/// Validate `args` and pick the branch, without emitting any items.
pub fn plan(args: &PaginationArgs) -> Result<Layout, PaginationError> {
    validate_args(args).inspect_err(|err| {
        warn!(error = %err, ?args, "pagination request rejected");
    })?;

    let length = window_length(args.edges, args.neighbors)?;
    let current = args.current_page();
    let h = half_floor(length);

    let branch = if args.pages <= length {
        Branch::Compact
    } else if current <= h {
        Branch::NearStart
    } else if current >= args.pages - h {
        Branch::NearEnd
    } else {
        Branch::Middle
    };

    Ok(Layout {
        pages: args.pages,
        edges: args.edges,
        neighbors: args.neighbors,
        current,
        length,
        branch,
    })
}

/// Reject malformed requests before any cluster is computed.
pub fn validate_args(args: &PaginationArgs) -> Result<(), PaginationError> {
    if args.pages < 1 {
        return Err(PaginationError::invalid("pages", args.pages, "must be >= 1"));
    }
    if args.edges < 0 {
        return Err(PaginationError::invalid("edges", args.edges, "must be >= 0"));
    }
    if args.neighbors < 0 {
        return Err(PaginationError::invalid(
            "neighbors",
            args.neighbors,
            "must be >= 0",
        ));
    }
    // Every cluster bound is at most `length` past its anchor.
    window_length(args.edges, args.neighbors)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Branch layouts (private)
// ---------------------------------------------------------------------------

fn push_pages(out: &mut Vec<PaginationItem>, pages: impl Iterator<Item = i64>) {
    out.extend(pages.map(PaginationItem::page));
}

/// Right edge cluster: `pages - edges + 1 ..= pages`, empty when `edges = 0`.
fn right_edge(layout: &Layout) -> impl Iterator<Item = i64> {
    range_inclusive(layout.pages - layout.edges + 1, layout.pages)
}

/// Left edge cluster: `1 ..= edges`, empty when `edges = 0`.
fn left_edge(layout: &Layout) -> impl Iterator<Item = i64> {
    range_inclusive(1, layout.edges)
}

fn build_compact(layout: &Layout) -> Vec<PaginationItem> {
    let mut out = Vec::with_capacity(layout.pages.max(0) as usize);
    push_pages(&mut out, range_inclusive(1, layout.pages));
    out
}

fn build_near_start(layout: &Layout) -> Vec<PaginationItem> {
    let left_end = half_ceil(layout.length) + layout.neighbors;

    let mut out = Vec::with_capacity(layout.length as usize);
    push_pages(&mut out, range_inclusive(1, left_end));
    // Emitted even when no edge pages follow it.
    out.push(PaginationItem::ellipsis(EllipsisPosition::End));
    push_pages(&mut out, right_edge(layout));
    out
}

fn build_near_end(layout: &Layout) -> Vec<PaginationItem> {
    let aligned = layout.pages - half_floor(layout.length) - layout.neighbors;
    let right_start = aligned.min(layout.current - layout.neighbors);

    let mut out = Vec::with_capacity(layout.length as usize);
    push_pages(&mut out, left_edge(layout));
    out.push(PaginationItem::ellipsis(EllipsisPosition::Start));
    push_pages(&mut out, range_inclusive(right_start, layout.pages));
    out
}

fn build_middle(layout: &Layout) -> Vec<PaginationItem> {
    let center_start = layout.current - layout.neighbors;
    let center_end = layout.current + layout.neighbors;

    let mut out = Vec::with_capacity(layout.length as usize);
    push_pages(&mut out, left_edge(layout));

    // Bridge: a single hidden page is shown, not collapsed.
    // Only the start side is checked.
    if center_start == layout.edges + 2 {
        out.push(PaginationItem::page(layout.edges + 1));
    } else {
        out.push(PaginationItem::ellipsis(EllipsisPosition::Start));
    }

    push_pages(&mut out, range_inclusive(center_start, center_end));
    out.push(PaginationItem::ellipsis(EllipsisPosition::End));
    push_pages(&mut out, right_edge(layout));
    out
}
