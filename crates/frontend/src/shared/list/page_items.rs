//! Page indicator generation for pagination controls.
//!
//! Produces the sequence of page numbers and ellipsis gaps rendered between
//! the "previous" and "next" buttons. Pages are 1-based.

/// One token of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Smallest useful control: first page, one window page, last page.
const MIN_PAGES_TO_SHOW: u32 = 3;

/// Returns the page tokens for `current_page` out of `total_pages`.
///
/// When everything fits into `max_pages_to_show`, every page is listed.
/// Otherwise the first and last pages are always present, and a window
/// anchored at the start, anchored at the end, or centred on the current
/// page fills the rest. An ellipsis marks every gap between the window and
/// a boundary page.
///
/// ```
/// use frontend::shared::list::page_items::{page_items, PageItem::*};
/// assert_eq!(page_items(5, 10, 5), vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
/// ```
pub fn page_items(current_page: u32, total_pages: u32, max_pages_to_show: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max = max_pages_to_show.max(MIN_PAGES_TO_SHOW);
    let current = current_page.clamp(1, total_pages);

    if total_pages <= max {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let (start, end) = visible_window(current, total_pages, max);
    let mut items = Vec::with_capacity(max as usize + 2);

    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total_pages {
        if end + 1 < total_pages {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }

    items
}

/// Inclusive page range shown besides the boundary pages. Requires `total > max >= 3`.
fn visible_window(current: u32, total: u32, max: u32) -> (u32, u32) {
    let head = max.div_ceil(2);
    let tail = max / 2;

    if current <= head {
        (1, max - 1)
    } else if current >= total - tail {
        (total - (max - 2), total)
    } else {
        let width = max - 2;
        let start = current - (width - 1) / 2;
        (start, start + width - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_everything_fits() {
        for current in 1..=3 {
            assert_eq!(page_items(current, 3, 5), vec![Page(1), Page(2), Page(3)]);
        }
        assert_eq!(
            page_items(5, 5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_near_start() {
        let expected = vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)];
        assert_eq!(page_items(1, 10, 5), expected);
        assert_eq!(page_items(3, 10, 5), expected);
    }

    #[test]
    fn test_near_end() {
        let expected = vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)];
        assert_eq!(page_items(10, 10, 5), expected);
        assert_eq!(page_items(8, 10, 5), expected);
    }

    #[test]
    fn test_middle_window() {
        assert_eq!(
            page_items(5, 10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(7, 10, 5),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_four_pages_to_show() {
        assert_eq!(
            page_items(1, 10, 4),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(5, 10, 4),
            vec![Page(1), Ellipsis, Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(9, 10, 4),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_regime_boundaries() {
        // current 4 of 6 already counts as "near the end"
        assert_eq!(
            page_items(4, 6, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            page_items(3, 6, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(page_items(1, 0, 5).is_empty());
        // out-of-range current page is clamped
        assert_eq!(page_items(0, 10, 5), page_items(1, 10, 5));
        assert_eq!(page_items(99, 10, 5), page_items(10, 10, 5));
        // tiny max is widened to three tokens of pages
        assert_eq!(page_items(5, 10, 1), vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_shows_exactly_max_pages_when_truncated() {
        for max in 3..=7 {
            for current in 1..=20 {
                let pages = page_items(current, 20, max)
                    .into_iter()
                    .filter(|i| matches!(i, Page(_)))
                    .count() as u32;
                assert_eq!(pages, max, "current={current} max={max}");
            }
        }
    }
}
