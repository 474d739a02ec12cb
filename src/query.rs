//! Request-boundary helpers for list endpoints.
//!
//! Handlers deserialize [`PageParams`] straight from URL query parameters,
//! resolve them against the row count, and hand the resulting
//! [`ListSelection`] to the repository query.

use log::warn;
use serde::Deserialize;

use crate::pagination::{PageRequest, PageWindow};

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const MIN_ROWS_PER_PAGE: usize = 10;
pub const MAX_ROWS_PER_PAGE: usize = 100;

/// Pagination parameters as they arrive from the query string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageParams {
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Requested page size, bounded on resolution.
    pub rows_per_page: Option<usize>,
}

impl PageParams {
    /// Resolves the raw parameters into a [`PageRequest`], applying
    /// defaults and clamping the page size into the configured bounds.
    /// Out-of-range requests are recoverable and only logged.
    pub fn resolve(&self, total_count: usize) -> PageRequest {
        let page = self.page.unwrap_or(1).max(1);

        let rows_per_page = match self.rows_per_page {
            None => DEFAULT_ROWS_PER_PAGE,
            Some(0) => {
                warn!("rows_per_page=0 requested, falling back to {MIN_ROWS_PER_PAGE}");
                MIN_ROWS_PER_PAGE
            }
            Some(requested) => {
                let clamped = requested.clamp(MIN_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE);
                if clamped != requested {
                    warn!("rows_per_page={requested} out of bounds, clamped to {clamped}");
                }
                clamped
            }
        };

        PageRequest {
            page,
            rows_per_page,
            total_count,
        }
    }
}

/// Offset/limit pair handed to the repository data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSelection {
    pub offset: usize,
    pub limit: usize,
}

impl From<&PageWindow> for ListSelection {
    fn from(window: &PageWindow) -> Self {
        Self {
            offset: window.offset,
            limit: window.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_use_defaults() {
        let request = PageParams::default().resolve(42);
        assert_eq!(request.page, 1);
        assert_eq!(request.rows_per_page, DEFAULT_ROWS_PER_PAGE);
        assert_eq!(request.total_count, 42);
    }

    #[test]
    fn zero_rows_per_page_falls_back_to_minimum() {
        let params = PageParams {
            page: Some(2),
            rows_per_page: Some(0),
        };
        let request = params.resolve(100);
        assert_eq!(request.rows_per_page, MIN_ROWS_PER_PAGE);
        assert_eq!(request.page, 2);
    }

    #[test]
    fn rows_per_page_is_clamped_into_bounds() {
        let too_small = PageParams {
            page: None,
            rows_per_page: Some(3),
        };
        assert_eq!(too_small.resolve(0).rows_per_page, MIN_ROWS_PER_PAGE);

        let too_large = PageParams {
            page: None,
            rows_per_page: Some(5000),
        };
        assert_eq!(too_large.resolve(0).rows_per_page, MAX_ROWS_PER_PAGE);
    }

    #[test]
    fn page_zero_becomes_page_one() {
        let params = PageParams {
            page: Some(0),
            rows_per_page: None,
        };
        assert_eq!(params.resolve(10).page, 1);
    }
}
