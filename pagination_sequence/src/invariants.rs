/// Pagination Kernel — Output Invariant Checks
///
/// Every check returns the first violation found. `build` output must
/// pass all of them for any valid request with `page >= 1`.

use thiserror::Error;

use crate::domain::PaginationItem;

/// Most ellipses a sequence may carry.
pub const MAX_ELLIPSES: usize = 2;

/// A produced sequence breaks one of the layout guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("[INVARIANT:page_range] page {page} outside 1..={pages}")]
    PageOutOfRange { page: i64, pages: i64 },

    #[error("[INVARIANT:strictly_increasing] page {page} follows page {previous}")]
    NotIncreasing { previous: i64, page: i64 },

    #[error("[INVARIANT:gap_marked] pages {before} and {after} are not adjacent and no ellipsis separates them")]
    UnmarkedGap { before: i64, after: i64 },

    #[error("[INVARIANT:ellipsis_width] ellipsis between {before} and {after} hides fewer than two pages")]
    NarrowEllipsis { before: i64, after: i64 },

    #[error("[INVARIANT:ellipsis_adjacent] two ellipses in a row at index {index}")]
    AdjacentEllipses { index: usize },

    #[error("[INVARIANT:ellipsis_count] {count} ellipses, at most 2 allowed")]
    TooManyEllipses { count: usize },

    #[error("[INVARIANT:current_present] current page {current} is not in the sequence")]
    CurrentMissing { current: i64 },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run every check against `items` for a paginator of `pages` pages.
///
/// `current` is checked only when it lies in `[1, pages]`; a request
/// with `page < 1` is never clamped up, so there is nothing to find.
pub fn validate_sequence(
    items: &[PaginationItem],
    pages: i64,
    current: i64,
) -> Result<(), InvariantViolation> {
    check_ellipsis_count(items)?;
    check_pages_and_gaps(items, pages)?;
    if (1..=pages).contains(&current) {
        check_current_present(items, current)?;
    }
    Ok(())
}

/// Boolean convenience wrapper over `validate_sequence`.
pub fn is_valid_sequence(items: &[PaginationItem], pages: i64, current: i64) -> bool {
    validate_sequence(items, pages, current).is_ok()
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

fn check_ellipsis_count(items: &[PaginationItem]) -> Result<(), InvariantViolation> {
    let count = items.iter().filter(|i| i.is_ellipsis()).count();
    if count > MAX_ELLIPSES {
        return Err(InvariantViolation::TooManyEllipses { count });
    }
    Ok(())
}

/// Walks the sequence between two sentinels, page 0 and page `pages + 1`,
/// so leading and trailing gaps are checked the same way as inner ones.
fn check_pages_and_gaps(items: &[PaginationItem], pages: i64) -> Result<(), InvariantViolation> {
    let mut previous = 0i64;
    let mut pending_ellipsis = false;

    for (index, item) in items.iter().enumerate() {
        match item.as_page() {
            None => {
                if pending_ellipsis {
                    return Err(InvariantViolation::AdjacentEllipses { index });
                }
                pending_ellipsis = true;
            }
            Some(page) => {
                if page < 1 || page > pages {
                    return Err(InvariantViolation::PageOutOfRange { page, pages });
                }
                if page <= previous {
                    return Err(InvariantViolation::NotIncreasing { previous, page });
                }
                check_gap(previous, page, pending_ellipsis)?;
                previous = page;
                pending_ellipsis = false;
            }
        }
    }

    check_gap(previous, pages.saturating_add(1), pending_ellipsis)
}

fn check_gap(before: i64, after: i64, ellipsis: bool) -> Result<(), InvariantViolation> {
    let hidden = after - before - 1;
    if ellipsis && hidden < 2 {
        return Err(InvariantViolation::NarrowEllipsis { before, after });
    }
    if !ellipsis && hidden > 0 {
        return Err(InvariantViolation::UnmarkedGap { before, after });
    }
    Ok(())
}

fn check_current_present(items: &[PaginationItem], current: i64) -> Result<(), InvariantViolation> {
    if items.iter().any(|i| i.as_page() == Some(current)) {
        Ok(())
    } else {
        Err(InvariantViolation::CurrentMissing { current })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EllipsisPosition;

    fn p(page: i64) -> PaginationItem {
        PaginationItem::page(page)
    }

    fn gap() -> PaginationItem {
        PaginationItem::ellipsis(EllipsisPosition::End)
    }

    #[test]
    fn test_valid_compact_sequence() {
        let items: Vec<_> = (1..=5).map(p).collect();
        assert!(validate_sequence(&items, 5, 3).is_ok());
    }

    #[test]
    fn test_valid_collapsed_sequence() {
        let items = vec![p(1), p(2), gap(), p(5), p(6), p(7), gap(), p(11), p(12)];
        assert!(validate_sequence(&items, 12, 6).is_ok());
    }

    #[test]
    fn test_trailing_ellipsis_counts_hidden_tail() {
        assert!(is_valid_sequence(&[p(1), p(2), gap()], 4, 1));
        assert_eq!(
            validate_sequence(&[p(1), p(2), gap()], 3, 1),
            Err(InvariantViolation::NarrowEllipsis { before: 2, after: 4 })
        );
    }

    #[test]
    fn test_single_hidden_page_must_not_be_collapsed() {
        let items = vec![p(1), gap(), p(3)];
        assert_eq!(
            validate_sequence(&items, 3, 1),
            Err(InvariantViolation::NarrowEllipsis { before: 1, after: 3 })
        );
    }

    #[test]
    fn test_unmarked_gap() {
        let items = vec![p(1), p(4)];
        assert_eq!(
            validate_sequence(&items, 4, 1),
            Err(InvariantViolation::UnmarkedGap { before: 1, after: 4 })
        );
        // Missing tail without a trailing ellipsis.
        assert!(matches!(
            validate_sequence(&[p(1), p(2)], 3, 1),
            Err(InvariantViolation::UnmarkedGap { .. })
        ));
    }

    #[test]
    fn test_not_increasing() {
        let items = vec![p(1), p(2), p(2)];
        assert_eq!(
            validate_sequence(&items, 3, 1),
            Err(InvariantViolation::NotIncreasing { previous: 2, page: 2 })
        );
    }

    #[test]
    fn test_page_out_of_range() {
        assert_eq!(
            validate_sequence(&[p(0)], 3, 1),
            Err(InvariantViolation::PageOutOfRange { page: 0, pages: 3 })
        );
    }

    #[test]
    fn test_adjacent_and_excess_ellipses() {
        let items = vec![p(1), gap(), gap(), p(9)];
        assert_eq!(
            validate_sequence(&items, 9, 1),
            Err(InvariantViolation::AdjacentEllipses { index: 2 })
        );

        let items = vec![gap(), p(4), gap(), p(8), gap()];
        assert_eq!(
            validate_sequence(&items, 12, 4),
            Err(InvariantViolation::TooManyEllipses { count: 3 })
        );
    }

    #[test]
    fn test_current_missing_only_when_in_range() {
        let items = vec![p(1), p(2), gap()];
        assert_eq!(
            validate_sequence(&items, 9, 5),
            Err(InvariantViolation::CurrentMissing { current: 5 })
        );
        assert!(validate_sequence(&items, 9, 0).is_ok());
        assert!(validate_sequence(&items, 9, -7).is_ok());
    }
}
