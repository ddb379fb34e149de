//! Pagination utilities for service layer
//!
//! Resolves optional request paging against catalog settings and clamps it.

use configs::CatalogConfig;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Fill missing values from `cfg`, then normalize against its page-size limit.
    pub fn resolve(page: Option<u32>, limit: Option<u32>, cfg: &CatalogConfig) -> Self {
        Self { page: page.unwrap_or(1), per_page: limit.unwrap_or(cfg.default_page_size) }
            .normalize_with(cfg.max_page_size)
    }

    /// Clamp `page >= 1` and `per_page` to `1..=max`.
    pub fn normalize_with(self, max: u32) -> Self {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, max.max(1));
        Self { page, per_page }
    }

    /// Number of records to skip for this page.
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 10 } }
}
