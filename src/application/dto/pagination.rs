// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};

/// Articles shown per home page.
pub const HOME_PAGE_SIZE: u32 = 5;
/// Rows per page on admin listings.
pub const ADMIN_PAGE_SIZE: u32 = 100;

/// Page-number paginator that never fails: unusable page values fall back to
/// the first page and out-of-range values clamp to the last one.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: u32,
}

impl Paginator {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// An empty result set still has one (empty) page.
    pub fn num_pages(&self, count: u64) -> u32 {
        if count == 0 {
            return 1;
        }
        let pages = count.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Interpret a raw `page` parameter. Absent, non-numeric, zero and
    /// negative values map to page 1; very large values saturate.
    pub fn requested_page(raw: Option<&str>) -> u32 {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return 1;
        };

        match raw.parse::<i64>() {
            Ok(n) if n < 1 => 1,
            Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
            Err(_) if raw.bytes().all(|b| b.is_ascii_digit()) => u32::MAX,
            Err(_) => 1,
        }
    }

    pub fn window(&self, count: u64, raw: Option<&str>) -> PageWindow {
        let num_pages = self.num_pages(count);
        let number = Self::requested_page(raw).min(num_pages);
        PageWindow {
            number,
            num_pages,
            count,
            per_page: self.per_page,
        }
    }
}

/// Resolved position of one page inside a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u32,
    pub num_pages: u32,
    pub count: u64,
    pub per_page: u32,
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        u64::from(self.number - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u32 {
        self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub num_pages: u32,
    pub count: u64,
    pub per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub previous_page_number: Option<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        let has_next = window.has_next();
        let has_previous = window.has_previous();
        Self {
            items,
            number: window.number,
            num_pages: window.num_pages,
            count: window.count,
            per_page: window.per_page,
            has_next,
            has_previous,
            next_page_number: has_next.then(|| window.number + 1),
            previous_page_number: has_previous.then(|| window.number - 1),
        }
    }
}
