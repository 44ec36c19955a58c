//! Pagination Model
//!
//! Derives the visible page strip from (current page, total pages). The strip
//! is bounded at 7 entries no matter how many pages exist, so rendering cost
//! never grows with the result count. Ellipsis entries are non-interactive.

use std::fmt;

/// One entry in the visible page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap marker; not interactive.
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "…"),
        }
    }
}

/// Computes the visible page strip.
///
/// - `total <= 7`: every page.
/// - near the start (`current <= 4`): `1 2 3 4 5 … total`.
/// - near the end (`current >= total - 3`): `1 … total-4 .. total`.
/// - otherwise: `1 … current-1 current current+1 … total`.
///
/// Always includes page 1 and `total` when any pages exist.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    if current <= 4 {
        let mut items: Vec<PageItem> = (1..=5).map(PageItem::Page).collect();
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
        return items;
    }

    if current >= total - 3 {
        let mut items = vec![PageItem::Page(1), PageItem::Ellipsis];
        items.extend((total - 4..=total).map(PageItem::Page));
        return items;
    }

    vec![
        PageItem::Page(1),
        PageItem::Ellipsis,
        PageItem::Page(current - 1),
        PageItem::Page(current),
        PageItem::Page(current + 1),
        PageItem::Ellipsis,
        PageItem::Page(total),
    ]
}
