//! Page window computation for list pagination.
//!
//! Pages are 1-based everywhere in this module.

/// One button slot of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Above this many pages the bar collapses into first/window/last with ellipses
const MAX_PLAIN_PAGES: usize = 7;

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_items.div_ceil(size)
}

/// Inclusive 1-based range of items shown on `current_page`.
///
/// Returns `None` when there is nothing to show.
pub fn item_range(current_page: usize, page_size: usize, total_items: usize) -> Option<(usize, usize)> {
    if total_items == 0 {
        return None;
    }
    let size = page_size.max(1);
    let last_page = total_pages(total_items, size);
    let page = current_page.clamp(1, last_page);
    let start = (page - 1) * size + 1;
    let end = (page * size).min(total_items);
    Some((start, end))
}

/// "Showing 21–40 of 97"
pub fn range_label(current_page: usize, page_size: usize, total_items: usize) -> String {
    match item_range(current_page, page_size, total_items) {
        Some((start, end)) => format!("Showing {}–{} of {}", start, end, total_items),
        None => "No items".to_string(),
    }
}

/// Compact sequence of page buttons around `current_page`
pub fn page_sequence(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= MAX_PLAIN_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut items = vec![PageItem::Page(1)];

    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    let window_start = current.saturating_sub(1).max(2);
    let window_end = (current + 1).min(total_pages - 1);
    for page in window_start..=window_end {
        if page != 1 && page != total_pages {
            items.push(PageItem::Page(page));
        }
    }

    if current < total_pages - 2 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

pub fn has_prev(current_page: usize) -> bool {
    current_page > 1
}

pub fn has_next(current_page: usize, total_pages: usize) -> bool {
    current_page < total_pages
}

pub fn prev_page(current_page: usize) -> usize {
    current_page.saturating_sub(1).max(1)
}

pub fn next_page(current_page: usize, total_pages: usize) -> usize {
    (current_page + 1).min(total_pages.max(1))
}

/// Pagination controls are hidden when there are no pages or no items
pub fn should_render(total_pages: usize, total_items: usize) -> bool {
    total_pages > 0 && total_items > 0
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(97, 20), 5);
    }

    #[test]
    fn test_item_range_stays_within_bounds() {
        for total in 0..60usize {
            for size in 1..12usize {
                let pages = total_pages(total, size);
                for page in 1..=pages.max(1) {
                    match item_range(page, size, total) {
                        Some((start, end)) => {
                            assert!(start >= 1 && start <= end && end <= total);
                            assert!(end - start < size);
                        }
                        None => assert_eq!(total, 0),
                    }
                }
            }
        }
    }

    #[test]
    fn test_item_range_last_partial_page() {
        assert_eq!(item_range(5, 20, 97), Some((81, 97)));
        assert_eq!(item_range(1, 20, 97), Some((1, 20)));
    }

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(2, 20, 97), "Showing 21–40 of 97");
        assert_eq!(range_label(1, 20, 0), "No items");
    }

    #[test]
    fn test_sequence_middle_window() {
        assert_eq!(
            page_sequence(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_sequence_small_total_has_no_ellipsis() {
        for current in 1..=5 {
            assert_eq!(
                page_sequence(current, 5),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
            );
        }
    }

    #[test]
    fn test_sequence_edges() {
        assert_eq!(
            page_sequence(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_sequence(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_sequence(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_sequence(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_sequence_has_no_duplicates() {
        for total in 1..30 {
            for current in 1..=total {
                let pages: Vec<usize> = page_sequence(current, total)
                    .into_iter()
                    .filter_map(|i| match i {
                        Page(n) => Some(n),
                        Ellipsis => None,
                    })
                    .collect();
                let mut sorted = pages.clone();
                sorted.dedup();
                assert_eq!(pages, sorted, "current={} total={}", current, total);
                assert!(pages.contains(&current));
            }
        }
    }

    #[test]
    fn test_prev_next_clamp() {
        assert!(!has_prev(1));
        assert!(has_prev(2));
        assert!(!has_next(4, 4));
        assert!(has_next(3, 4));
        assert_eq!(prev_page(1), 1);
        assert_eq!(next_page(4, 4), 4);
        assert_eq!(next_page(2, 4), 3);
    }

    #[test]
    fn test_should_render() {
        assert!(!should_render(0, 0));
        assert!(!should_render(1, 0));
        assert!(should_render(1, 3));
    }
}
