//! Pagination arithmetic over an ordered sequence.
//!
//! Everything here is pure: given the length of a sequence and a requested page,
//! compute which index range to return and the summary metadata describing it.
//! Pages are 1-based. Requesting a page past the end is not an error; it yields
//! an empty range with `showing = 0`.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A validated page request. Both values are always positive.
///
/// Deserialization goes through [`PageRequest::new`], so zero or missing
/// values fall back to the defaults there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    page_size: u32,
}

impl From<RawPageRequest> for PageRequest {
    fn from(raw: RawPageRequest) -> Self {
        Self::new(raw.page, raw.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request. Zero values fall back to the defaults.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// Each value falls back to its default on its own when it is absent or
    /// does not parse as a positive integer.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            page_size: parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// The 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The maximum number of items per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

fn parse_positive(value: Option<&str>) -> Option<u32> {
    value?.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

/// Summary metadata for one page of results.
///
/// Field order matches the wire format: `page, totalPages, pageSize, total, showing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page (echoed)
    pub page: u32,
    /// Number of pages needed to show every item; 0 for an empty sequence
    pub total_pages: usize,
    /// Requested page size (echoed)
    pub page_size: u32,
    /// Length of the whole sequence
    pub total: usize,
    /// Items actually on this page
    pub showing: usize,
}

/// The index range selected for a page together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Half-open index range into the sequence; empty past the last page
    pub range: Range<usize>,
    /// Metadata describing the page
    pub pagination: Pagination,
}

impl PageWindow {
    /// Select this window's items from a slice of the full sequence.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.range.end.min(items.len());
        let start = self.range.start.min(end);
        &items[start..end]
    }
}

/// Compute the window for `request` over a sequence of `total` items.
pub fn paginate(total: usize, request: PageRequest) -> PageWindow {
    let page_size = request.page_size.max(1) as usize;
    let start = (request.page.max(1) as usize - 1).saturating_mul(page_size);

    let range = if start < total {
        start..start.saturating_add(page_size).min(total)
    } else {
        total..total
    };

    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };

    PageWindow {
        pagination: Pagination {
            page: request.page,
            total_pages,
            page_size: request.page_size,
            total,
            showing: range.len(),
        },
        range,
    }
}
