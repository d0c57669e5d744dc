//! Page-number math behind the pagination footer.

/// One slot of the desktop page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// At most seven slots: every page when there are few, otherwise the first page, the
/// current page with its neighbours, and the last page, with ellipses over the gaps.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));
    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// First and last item numbers shown on `page`, for "Mostrando X até Y de Z".
pub fn item_range(page: u32, limit: u32, total: u64) -> (u64, u64) {
    let page = u64::from(page.max(1));
    let limit = u64::from(limit);
    let first = (page - 1) * limit + 1;
    let last = (page * limit).min(total);
    (first, last)
}

pub fn has_previous(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_few_pages_lists_all() {
        assert_eq!(page_items(1, 0), vec![]);
        assert_eq!(
            page_items(3, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_middle_page_has_both_ellipses() {
        assert_eq!(
            page_items(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_edges() {
        assert_eq!(
            page_items(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_items(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_items(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_item_range() {
        assert_eq!(item_range(1, 10, 95), (1, 10));
        assert_eq!(item_range(10, 10, 95), (91, 95));
        assert_eq!(item_range(1, 10, 0), (1, 0));
        assert!(!has_previous(1));
        assert!(has_next(9, 10));
        assert!(!has_next(10, 10));
    }
}
