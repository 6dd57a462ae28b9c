/// Pagination Kernel — Core Domain Types
///
/// Pure data. No layout logic lives here.

use serde::{Deserialize, Serialize};

/// Pages pinned at each end when the caller does not say otherwise.
pub const DEFAULT_EDGES: i64 = 2;

/// Pages shown on each side of the current page when the caller does not say otherwise.
pub const DEFAULT_NEIGHBORS: i64 = 2;

fn default_edges() -> i64 {
    DEFAULT_EDGES
}

fn default_neighbors() -> i64 {
    DEFAULT_NEIGHBORS
}

// ── Request ────────────────────────────────────────────────────────

/// A pagination request.
///
/// `page` may lie outside `[1, pages]`; the builder clamps it down to
/// `pages` but never up to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationArgs {
    pub page: i64,
    pub pages: i64,
    #[serde(default = "default_edges")]
    pub edges: i64,
    #[serde(default = "default_neighbors")]
    pub neighbors: i64,
}

impl PaginationArgs {
    /// Request for `page` of `pages` with the default display parameters.
    pub fn new(page: i64, pages: i64) -> Self {
        Self {
            page,
            pages,
            edges: DEFAULT_EDGES,
            neighbors: DEFAULT_NEIGHBORS,
        }
    }

    pub fn with_edges(mut self, edges: i64) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_neighbors(mut self, neighbors: i64) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// `min(page, pages)`. Deliberately not clamped up to 1.
    pub fn current_page(&self) -> i64 {
        self.page.min(self.pages)
    }
}

// ── Output ─────────────────────────────────────────────────────────

/// Which side of the visible window an ellipsis sits on.
/// Informative only (styling); never feeds back into the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsisPosition {
    Start,
    End,
}

impl EllipsisPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            EllipsisPosition::Start => "start",
            EllipsisPosition::End => "end",
        }
    }
}

/// One entry of a pagination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaginationItem {
    /// A page link to render.
    Page { page: i64 },
    /// Two or more hidden pages.
    Ellipsis { position: EllipsisPosition },
}

impl PaginationItem {
    pub fn page(page: i64) -> Self {
        PaginationItem::Page { page }
    }

    pub fn ellipsis(position: EllipsisPosition) -> Self {
        PaginationItem::Ellipsis { position }
    }

    /// The page number, if this is a page item.
    pub fn as_page(&self) -> Option<i64> {
        match self {
            PaginationItem::Page { page } => Some(*page),
            PaginationItem::Ellipsis { .. } => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PaginationItem::Ellipsis { .. })
    }
}
