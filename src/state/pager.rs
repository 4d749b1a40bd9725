//! Page slicing and page-window rendering.
//!
//! Pure math over the filtered view: which records are on the current
//! page, how many pages exist, and which page buttons to draw when the
//! page count is too large to list every page.

/// Page counts up to this many are shown in full, with no ellipsis.
pub const WINDOW_FULL_THRESHOLD: usize = 10;

/// Pages kept on each side of the current page in a truncated window.
pub const WINDOW_CONTEXT: usize = 2;

/// One pagination control: a numbered button or an ellipsis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A numbered page button. The current page's button is shown but
    /// inert.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the current page.
        is_current: bool,
    },
    /// A single ellipsis standing in for an omitted run of pages.
    Ellipsis,
}

/// Total pages for a view of `len` records: `ceil(len / page_size)`, with
/// a minimum of 1 so an empty view is "page 1 of 1, empty", never "0
/// pages".
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// The records of page `page`: the half-open range
/// `[(page-1)*page_size, page*page_size)` clipped to the view. A page past
/// the end yields an empty slice, not an error.
pub fn page_slice<T>(view: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= view.len() {
        return &[];
    }
    let end = (start + page_size).min(view.len());
    &view[start..end]
}

/// The ordered control sequence for navigating `total` pages from
/// `current`.
///
/// With `total` at most [`WINDOW_FULL_THRESHOLD`], every page is listed.
/// Beyond that, each page index decides its own fate against three
/// conditions evaluated in order (numbered, ellipsis, omitted):
///
/// - numbered when it is page 1, the last page, or within
///   [`WINDOW_CONTEXT`] of the current page;
/// - a single ellipsis when it sits just outside the context window
///   (current ± 3);
/// - omitted otherwise.
///
/// Near the boundaries the ranges overlap naturally; no merging logic is
/// applied. `current` may lie outside `1..=total` (the page input is not
/// clamped), in which case the context window simply contributes no
/// buttons.
pub fn page_window(current: usize, total: usize) -> Vec<PageControl> {
    let mut controls = Vec::new();
    for page in 1..=total {
        let in_context = page + WINDOW_CONTEXT >= current && page <= current + WINDOW_CONTEXT;
        if total <= WINDOW_FULL_THRESHOLD || page == 1 || page == total || in_context {
            controls.push(PageControl::Page {
                number: page,
                is_current: page == current,
            });
        } else if page + WINDOW_CONTEXT + 1 == current || page == current + WINDOW_CONTEXT + 1 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls
}

// ===== Tests =====

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
