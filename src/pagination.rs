//! Client-side pagination.
//!
//! Two independent pieces live here:
//!
//! - **Slice selection**: which items of the full collection are visible on a
//!   given page ([`page_count`], [`page_range`], [`page_slice`]).
//! - **Page-control windowing**: which page-number controls the navigation bar
//!   shows around the current page ([`page_window`], [`page_controls`]).
//!
//! Pages are 1-indexed. Nothing in this module clamps navigation requests;
//! that is left to the caller holding the page cursor.

use std::ops::{Range, RangeInclusive};

/// Number of posts per page
pub const PAGE_SIZE: usize = 6;

/// Pages shown on each side of the current page in the navigation bar
pub const WINDOW_RADIUS: usize = 2;

/// Number of pages needed for `total` items. Never less than 1.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Index range of the items visible on page `current`.
///
/// The last page may be short. A page past the end yields an empty range
/// positioned at `total`.
pub fn page_range(total: usize, page_size: usize, current: usize) -> Range<usize> {
    let start = current.saturating_sub(1).saturating_mul(page_size);
    if start >= total {
        return total..total;
    }
    start..start.saturating_add(page_size).min(total)
}

/// The items visible on page `current`.
pub fn page_slice<T>(items: &[T], page_size: usize, current: usize) -> &[T] {
    &items[page_range(items.len(), page_size, current)]
}

/// Contiguous run of page numbers to show around `current`.
///
/// Up to `2 * WINDOW_RADIUS + 1` numbers centered on `current`. When one end
/// is clamped against `1` or `pages`, the window grows at the other end
/// instead; only the clamped side triggers growth.
pub fn page_window(current: usize, pages: usize) -> RangeInclusive<usize> {
    let pages = pages.max(1);
    let span = WINDOW_RADIUS * 2;

    let mut start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let mut end = current.saturating_add(WINDOW_RADIUS).min(pages);

    if end.saturating_sub(start) < span {
        if start == 1 {
            end = (start + span).min(pages);
        } else if end == pages {
            start = end.saturating_sub(span).max(1);
        }
    }

    start..=end
}

/// One element of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Step back one page; disabled on the first page
    Previous { enabled: bool },
    /// Jump to a page
    Page { number: usize, current: bool },
    /// Gap marker between page 1 / last page and the window
    Ellipsis,
    /// Step forward one page; disabled on the last page
    Next { enabled: bool },
}

impl PageControl {
    /// Page requested when this control is activated while on `current`.
    ///
    /// The value is not clamped: `Previous` on page 1 requests page 0.
    pub fn target(&self, current: usize) -> Option<usize> {
        match self {
            PageControl::Previous { .. } => Some(current.saturating_sub(1)),
            PageControl::Page { number, .. } => Some(*number),
            PageControl::Ellipsis => None,
            PageControl::Next { .. } => Some(current.saturating_add(1)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            PageControl::Previous { enabled } | PageControl::Next { enabled } => *enabled,
            PageControl::Page { .. } => true,
            PageControl::Ellipsis => false,
        }
    }
}

/// Build the full navigation bar for `current` out of `pages`.
///
/// Page 1 and the last page are always reachable: if either falls outside the
/// window it is added explicitly, with an ellipsis when the gap to the window
/// is more than one page.
pub fn page_controls(current: usize, pages: usize) -> Vec<PageControl> {
    let pages = pages.max(1);
    let window = page_window(current, pages);
    let (first, last) = (*window.start(), *window.end());

    let mut controls = Vec::with_capacity(WINDOW_RADIUS * 2 + 5);
    controls.push(PageControl::Previous {
        enabled: current != 1,
    });

    if first > 1 {
        controls.push(PageControl::Page {
            number: 1,
            current: current == 1,
        });
        if first > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend(window.map(|number| PageControl::Page {
        number,
        current: number == current,
    }));

    if last < pages {
        if last < pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: pages,
            current: current == pages,
        });
    }

    controls.push(PageControl::Next {
        enabled: current != pages,
    });
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(controls: &[PageControl]) -> Vec<usize> {
        controls
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_page_count_minimum_one() {
        assert_eq!(page_count(0, PAGE_SIZE), 1);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(6, PAGE_SIZE), 1);
        assert_eq!(page_count(7, PAGE_SIZE), 2);
        assert_eq!(page_count(100, PAGE_SIZE), 17);
    }

    #[test]
    fn test_page_count_zero_page_size() {
        assert_eq!(page_count(10, 0), 1);
    }

    #[test]
    fn test_page_range_lengths_match_formula() {
        for total in 0..40usize {
            let pages = page_count(total, PAGE_SIZE);
            for current in 1..=pages + 1 {
                let expected = total
                    .saturating_sub((current - 1) * PAGE_SIZE)
                    .min(PAGE_SIZE);
                assert_eq!(
                    page_range(total, PAGE_SIZE, current).len(),
                    expected,
                    "total={} current={}",
                    total,
                    current
                );
            }
        }
    }

    #[test]
    fn test_page_range_final_page_is_short() {
        assert_eq!(page_range(14, PAGE_SIZE, 3), 12..14);
    }

    #[test]
    fn test_page_range_past_end_is_empty() {
        assert!(page_range(12, PAGE_SIZE, 3).is_empty());
        assert!(page_range(0, PAGE_SIZE, 1).is_empty());
    }

    #[test]
    fn test_page_slice_returns_window_items() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(page_slice(&items, PAGE_SIZE, 1), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, PAGE_SIZE, 2), &[7, 8, 9, 10]);
        assert!(page_slice(&items, PAGE_SIZE, 3).is_empty());
    }

    #[test]
    fn test_window_at_start_expands_right() {
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(2, 10), 1..=5);
    }

    #[test]
    fn test_window_at_end_expands_left() {
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(9, 10), 6..=10);
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(page_window(5, 10), 3..=7);
    }

    #[test]
    fn test_window_with_few_pages() {
        assert_eq!(page_window(1, 1), 1..=1);
        assert_eq!(page_window(2, 3), 1..=3);
        assert_eq!(page_window(3, 3), 1..=3);
    }

    #[test]
    fn test_window_beyond_last_page_is_anchored_to_end() {
        assert_eq!(page_window(12, 10), 6..=10);
    }

    #[test]
    fn test_controls_single_page() {
        let controls = page_controls(1, 1);
        assert_eq!(
            controls,
            vec![
                PageControl::Previous { enabled: false },
                PageControl::Page {
                    number: 1,
                    current: true
                },
                PageControl::Next { enabled: false },
            ]
        );
    }

    #[test]
    fn test_controls_first_page_of_many() {
        let controls = page_controls(1, 10);
        assert_eq!(numbers(&controls), vec![1, 2, 3, 4, 5, 10]);
        assert_eq!(controls[0], PageControl::Previous { enabled: false });
        assert_eq!(controls[controls.len() - 3], PageControl::Ellipsis);
        assert_eq!(
            controls[controls.len() - 1],
            PageControl::Next { enabled: true }
        );
    }

    #[test]
    fn test_controls_middle_page_has_both_ellipses() {
        let controls = page_controls(5, 10);
        assert_eq!(numbers(&controls), vec![1, 3, 4, 5, 6, 7, 10]);
        let ellipses = controls
            .iter()
            .filter(|c| **c == PageControl::Ellipsis)
            .count();
        assert_eq!(ellipses, 2);
    }

    #[test]
    fn test_controls_no_ellipsis_when_gap_is_one() {
        // window 2..=6 sits right next to page 1
        let controls = page_controls(4, 10);
        assert_eq!(numbers(&controls), vec![1, 2, 3, 4, 5, 6, 10]);
        assert_eq!(
            controls[1],
            PageControl::Page {
                number: 1,
                current: false
            }
        );
        assert_eq!(
            controls[2],
            PageControl::Page {
                number: 2,
                current: false
            }
        );
    }

    #[test]
    fn test_controls_last_page() {
        let controls = page_controls(10, 10);
        assert_eq!(numbers(&controls), vec![1, 6, 7, 8, 9, 10]);
        assert_eq!(
            controls[controls.len() - 1],
            PageControl::Next { enabled: false }
        );
    }

    #[test]
    fn test_controls_mark_current_page() {
        let current: Vec<usize> = page_controls(3, 10)
            .iter()
            .filter_map(|c| match c {
                PageControl::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(current, vec![3]);
    }

    #[test]
    fn test_control_targets_are_not_clamped() {
        let prev = PageControl::Previous { enabled: false };
        let next = PageControl::Next { enabled: false };
        assert_eq!(prev.target(1), Some(0));
        assert_eq!(next.target(4), Some(5));
        assert_eq!(PageControl::Ellipsis.target(4), None);
        assert_eq!(
            PageControl::Page {
                number: 7,
                current: false
            }
            .target(4),
            Some(7)
        );
    }

    #[test]
    fn test_control_enabled_flags() {
        assert!(!PageControl::Ellipsis.is_enabled());
        assert!(!PageControl::Previous { enabled: false }.is_enabled());
        assert!(PageControl::Next { enabled: true }.is_enabled());
    }
}
