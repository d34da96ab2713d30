//! Page-number pagination: request validation, page math and pages.
//!
//! Callers address a page with `first` (page size) and `skip` (page
//! number, 1-based). Without `first` the whole match set is returned as a
//! single unpaged result.

use serde::Serialize;

use crate::error::{ClientErrorCode, ClientInputError};

/// How a listing should be sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationRequest {
    /// Return every matching record.
    Unpaged,
    /// Return one page. Both values are at least 1.
    Paged { page_number: u64, page_size: u64 },
}

impl PaginationRequest {
    /// Validates the caller's `first`/`skip` arguments.
    ///
    /// - no `first`: [`PaginationRequest::Unpaged`], `skip` is ignored
    /// - `first` without `skip`: `MISSING_PAGINATION_CURSOR`
    /// - `first < 1`: `INVALID_PAGE_SIZE`
    /// - `skip < 0`: `INVALID_PAGE_NUMBER`
    /// - `skip == 0` addresses the first page, like `skip == 1`
    pub fn from_args(first: Option<i64>, skip: Option<i64>) -> Result<Self, ClientInputError> {
        let Some(first) = first else {
            return Ok(PaginationRequest::Unpaged);
        };
        let Some(skip) = skip else {
            return Err(ClientInputError::missing_pagination_cursor());
        };
        if first < 1 {
            return Err(ClientInputError::new(
                ClientErrorCode::InvalidPageSize,
                format!("page size must be at least 1, got {first}"),
            ));
        }
        if skip < 0 {
            return Err(ClientInputError::new(
                ClientErrorCode::InvalidPageNumber,
                format!("page number must not be negative, got {skip}"),
            ));
        }
        Ok(PaginationRequest::Paged {
            page_number: skip.max(1).unsigned_abs(),
            page_size: first.unsigned_abs(),
        })
    }

    /// Caps the page size at `max_page_size`, if set.
    pub fn clamped(self, max_page_size: Option<u64>) -> Self {
        match (self, max_page_size) {
            (
                PaginationRequest::Paged {
                    page_number,
                    page_size,
                },
                Some(max),
            ) => PaginationRequest::Paged {
                page_number,
                page_size: page_size.min(max.max(1)),
            },
            (pagination, _) => pagination,
        }
    }

    /// Returns the display name of the mode.
    pub fn mode(self) -> &'static str {
        match self {
            PaginationRequest::Unpaged => "unpaged",
            PaginationRequest::Paged { .. } => "paged",
        }
    }
}

/// Position of one page among all pages of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

impl PageMeta {
    /// Computes page metadata.
    ///
    /// `total_pages = ceil(total_count / page_size)`, `has_next` when the
    /// current page is before the last, `has_prev` when it is after the
    /// first. `page_size` of 0 is treated as 1.
    pub fn compute(total_count: u64, current_page: u64, page_size: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));
        let has_next = current_page < total_pages;
        let has_prev = current_page > 1;
        PageMeta {
            total_count,
            total_pages,
            current_page,
            has_next,
            has_prev,
            next_page: has_next.then(|| current_page + 1),
            prev_page: has_prev.then(|| current_page - 1),
        }
    }
}

/// One slice of a listing plus its position metadata.
///
/// Unpaged results are a single page without a page number: `has_next`
/// and `has_prev` are false, the page numbers are `None`, and
/// `total_pages` is 1 (0 when nothing matched).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next: bool,
    pub has_prev: bool,
    pub total_pages: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
    pub current_page: Option<u64>,
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Builds a page from store metadata.
    pub fn paged(items: Vec<T>, meta: PageMeta) -> Self {
        Page {
            items,
            has_next: meta.has_next,
            has_prev: meta.has_prev,
            total_pages: meta.total_pages,
            next_page: meta.next_page,
            prev_page: meta.prev_page,
            current_page: Some(meta.current_page),
            total_count: meta.total_count,
        }
    }

    /// Builds the single page of an unpaged listing.
    pub fn unpaged(items: Vec<T>, total_count: u64) -> Self {
        Page {
            items,
            has_next: false,
            has_prev: false,
            total_pages: u64::from(total_count > 0),
            next_page: None,
            prev_page: None,
            current_page: None,
            total_count,
        }
    }

    /// Maps every item, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_next: self.has_next,
            has_prev: self.has_prev,
            total_pages: self.total_pages,
            next_page: self.next_page,
            prev_page: self.prev_page,
            current_page: self.current_page,
            total_count: self.total_count,
        }
    }

    /// Returns true if the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
