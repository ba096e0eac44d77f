//! List page defaults.
//!
//! Every list page starts from [`ListConfig::default`]; resources override
//! individual knobs through `ListResource::config`.

use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_MAX_PAGES_TO_SHOW: u32 = 5;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_ALERT_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Rows requested per page (`limit`).
    pub page_size: u32,
    /// Page numbers rendered by the pagination control, ellipses excluded.
    pub max_pages_to_show: u32,
    /// Quiet window of the search box.
    pub debounce: Duration,
    /// How long error and success alerts stay visible.
    pub alert_lifetime: Duration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            debounce: DEFAULT_DEBOUNCE,
            alert_lifetime: DEFAULT_ALERT_LIFETIME,
        }
    }
}

impl ListConfig {
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub const fn with_max_pages_to_show(mut self, max: u32) -> Self {
        self.max_pages_to_show = max;
        self
    }
}
