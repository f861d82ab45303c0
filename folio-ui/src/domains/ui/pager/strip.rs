//! Page-control strip with ellipsis collapsing.

use folio_model::PageControl;

/// Number of pages needed for `len` items, `per_page` at a time.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Clamp a requested page into `[1, total_pages]` (1 when there are none).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Build the strip for `page` of `total_pages`.
///
/// Small page counts list every page. Larger ones always show the first and
/// last page plus a `window_size` run around the current page, with an
/// ellipsis wherever pages are skipped.
pub fn build_controls(
    page: usize,
    total_pages: usize,
    window_size: usize,
) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let page = clamp_page(page, total_pages);
    let window = window_size.max(1);

    let mut controls = Vec::with_capacity(window + 6);
    controls.push(PageControl::Previous {
        enabled: page > 1,
        target: page.saturating_sub(1).max(1),
    });

    let button = |number: usize| PageControl::Page {
        number,
        active: number == page,
    };

    if total_pages <= window + 2 {
        controls.extend((1..=total_pages).map(button));
    } else {
        let (start, end) = window_bounds(page, total_pages, window);
        controls.push(button(1));
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
        controls.extend((start..=end).map(button));
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(button(total_pages));
    }

    controls.push(PageControl::Next {
        enabled: page < total_pages,
        target: (page + 1).min(total_pages),
    });
    controls
}

/// Inclusive window of `window` pages around `page`, kept inside
/// `[2, total_pages - 1]`. Requires `total_pages > window + 2`.
fn window_bounds(page: usize, total_pages: usize, window: usize) -> (usize, usize) {
    let mut start = page.saturating_sub(window / 2).max(2);
    let mut end = start + window - 1;
    if end > total_pages - 1 {
        end = total_pages - 1;
        start = end + 1 - window;
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageControl::{Ellipsis, Next, Page, Previous};

    fn numbers(controls: &[PageControl]) -> Vec<Option<usize>> {
        controls
            .iter()
            .filter_map(|c| match c {
                Page { number, .. } => Some(Some(*number)),
                Ellipsis => Some(None),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert!(build_controls(1, 1, 3).is_empty());
        assert!(build_controls(1, 0, 3).is_empty());
    }

    #[test]
    fn three_pages_list_everything() {
        let controls = build_controls(2, 3, 3);
        assert_eq!(
            controls,
            vec![
                Previous {
                    enabled: true,
                    target: 1
                },
                Page {
                    number: 1,
                    active: false
                },
                Page {
                    number: 2,
                    active: true
                },
                Page {
                    number: 3,
                    active: false
                },
                Next {
                    enabled: true,
                    target: 3
                },
            ]
        );
    }

    #[test]
    fn five_pages_still_fit_without_ellipsis() {
        let controls = build_controls(1, 5, 3);
        assert_eq!(
            numbers(&controls),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn middle_page_gets_ellipses_on_both_sides() {
        let controls = build_controls(10, 20, 3);
        assert_eq!(
            numbers(&controls),
            vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
        );
    }

    #[test]
    fn first_page_shifts_the_window_right() {
        let controls = build_controls(1, 20, 3);
        assert_eq!(
            numbers(&controls),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(20)]
        );
        assert_eq!(
            controls.first(),
            Some(&Previous {
                enabled: false,
                target: 1
            })
        );
    }

    #[test]
    fn last_page_shifts_the_window_left() {
        let controls = build_controls(20, 20, 3);
        assert_eq!(
            numbers(&controls),
            vec![Some(1), None, Some(17), Some(18), Some(19), Some(20)]
        );
        assert_eq!(
            controls.last(),
            Some(&Next {
                enabled: false,
                target: 20
            })
        );
    }

    #[test]
    fn window_touching_page_two_has_no_left_ellipsis() {
        let controls = build_controls(3, 20, 3);
        assert_eq!(
            numbers(&controls),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(20)]
        );
    }

    #[test]
    fn exactly_one_active_button() {
        for total in 2..30 {
            for page in 1..=total {
                let active = build_controls(page, total, 3)
                    .iter()
                    .filter(|c| matches!(c, Page { active: true, .. }))
                    .count();
                assert_eq!(active, 1, "page {page} of {total}");
            }
        }
    }

    #[test]
    fn page_counts_round_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(200, 10), 20);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }
}
