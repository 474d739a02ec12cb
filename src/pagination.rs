//! Page-window arithmetic for list views.
//!
//! Given a total row count and the requested page/size, this module derives
//! the offset/limit pair for the data query together with the sequence of
//! page numbers (and collapsed gaps) shown by the page controls.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors produced while deriving a page window.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// A zero page size was requested; callers should fall back to a
    /// configured minimum instead of surfacing this to the end user.
    #[error("rows per page must be greater than zero")]
    InvalidRowsPerPage,
}

/// Display tuning for the visible page-number sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Sequences up to this long are rendered in full, without collapsing.
    pub max_pages: usize,
    /// Pages shown on each side of the current page.
    pub sibling_count: usize,
    /// Pages kept visible at the very start and very end of the sequence.
    pub boundary_count: usize,
    /// Gaps of up to this many pages are rendered as the pages themselves;
    /// anything wider collapses to a single ellipsis.
    pub dividing_point: usize,
    /// Marker rendered in place of a collapsed gap.
    pub ellipsis: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: 7,
            sibling_count: 1,
            boundary_count: 4,
            dividing_point: 3,
            ellipsis: "...".to_string(),
        }
    }
}

/// One render's worth of pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page number, 1-based. Out-of-range values are clamped.
    pub page: usize,
    pub rows_per_page: usize,
    /// Total rows matching the filter, from a count query.
    pub total_count: usize,
}

/// An entry in the visible page sequence.
///
/// Serializes as the page number or `null` for a collapsed gap, so templates
/// can branch on the value the same way they would on an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(number) => serializer.serialize_some(number),
            PageItem::Ellipsis => serializer.serialize_none(),
        }
    }
}

/// Derived pagination result for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Rows to skip in the data query.
    pub offset: usize,
    /// Rows to fetch in the data query.
    pub limit: usize,
    pub total_pages: usize,
    /// Requested page clamped into `1..=max(total_pages, 1)`.
    pub current_page: usize,
    pub items: Vec<PageItem>,
    /// Marker the template renders for collapsed gaps.
    pub ellipsis: String,
}

/// Derives the page window for `request`.
///
/// Clamps rather than rejects: an out-of-range `page` lands on the nearest
/// valid page. Only a zero `rows_per_page` is an error.
pub fn compute_page_window(
    request: PageRequest,
    config: &PaginationConfig,
) -> Result<PageWindow, PaginationError> {
    if request.rows_per_page == 0 {
        return Err(PaginationError::InvalidRowsPerPage);
    }

    let total_pages = request.total_count.div_ceil(request.rows_per_page);
    let current_page = if total_pages == 0 {
        1
    } else {
        request.page.clamp(1, total_pages)
    };

    Ok(PageWindow {
        offset: (current_page - 1) * request.rows_per_page,
        limit: request.rows_per_page,
        total_pages,
        current_page,
        items: visible_items(total_pages, current_page, config),
        ellipsis: config.ellipsis.clone(),
    })
}

fn visible_items(
    total_pages: usize,
    current_page: usize,
    config: &PaginationConfig,
) -> Vec<PageItem> {
    if total_pages == 0 {
        return vec![];
    }

    if total_pages <= config.max_pages {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let left_end = config.boundary_count.min(total_pages);
    let mid_start = current_page.saturating_sub(config.sibling_count).max(1);
    let mid_end = (current_page + config.sibling_count).min(total_pages);
    let right_start = (total_pages + 1)
        .saturating_sub(config.boundary_count)
        .max(1);

    // The sibling window can fall on either side of the trailing boundary,
    // so the runs must be merged in page order.
    let mut runs = [
        (1, left_end),
        (mid_start, mid_end),
        (right_start, total_pages),
    ];
    runs.sort_unstable();

    let mut items = Vec::new();
    let mut emitted = 0;

    for (start, end) in runs {
        let start = start.max(emitted + 1);
        if start > end {
            continue;
        }
        let gap = start - emitted - 1;
        if gap > 0 {
            if gap <= config.dividing_point {
                // Narrow gap: the pages themselves take no more room than
                // the marker would.
                items.extend((emitted + 1..start).map(PageItem::Page));
            } else {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        emitted = end;
    }

    items
}

/// One page of rows paired with the window that produced it, handed to
/// templates as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        Self { items, window }
    }
}
