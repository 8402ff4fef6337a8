//! Wire Models
//!
//! Data structures matching the listing backend's JSON responses.

use serde::Deserialize;

/// Pagination block reported by the listing endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageMeta {
    pub total_count: u64,
    pub limit: u64,
    pub offset: u64,
    /// Full URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// Full URL of the next page, absent on the last page
    pub next: Option<String>,
}

impl PageMeta {
    /// 1-based index of the page this offset falls on
    pub fn current_page(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }

    /// Total number of pages for this result set
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.limit)
    }
}

/// One result row; the fragment arrives pre-rendered and is never interpreted
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanObject {
    pub html: String,
}

/// One page of plan results
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanPage {
    pub meta: PageMeta,
    pub objects: Vec<PlanObject>,
}

/// Replacement fragments returned by the like-toggle endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LikeFragments {
    pub button: String,
    pub likes: String,
}
