//! Compact text form of a sequence, for fixtures, logs and the harness.
//!
//! ` 01 -[02]- 03 - .. - 11 - 12 `: two-digit pages, the current page
//! bracketed, ellipses as ` .. `, joined by `-`. Not a UI layer.

use crate::domain::PaginationItem;

/// Render `items`, marking `current`.
pub fn render(items: &[PaginationItem], current: i64) -> String {
    items
        .iter()
        .map(|item| render_item(item, current))
        .collect::<Vec<_>>()
        .join("-")
}

fn render_item(item: &PaginationItem, current: i64) -> String {
    match item {
        PaginationItem::Ellipsis { .. } => " .. ".to_string(),
        PaginationItem::Page { page } if *page == current => format!("[{:02}]", page),
        PaginationItem::Page { page } => format!(" {:02} ", page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EllipsisPosition;

    #[test]
    fn test_render_marks_current() {
        let items = vec![
            PaginationItem::page(1),
            PaginationItem::page(2),
            PaginationItem::ellipsis(EllipsisPosition::End),
        ];
        assert_eq!(render(&items, 2), " 01 -[02]- .. ");
        assert_eq!(render(&items, 1), "[01]- 02 - .. ");
    }

    #[test]
    fn test_render_wide_pages_are_not_truncated() {
        let items = vec![PaginationItem::page(120)];
        assert_eq!(render(&items, 0), " 120 ");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], 1), "");
    }
}
