// Derived dashboard views: counters and page slices

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::event::NumberedEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Event counters for one time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub total: u64,
    pub counts: Vec<CategoryCount>,
}

impl CategoryTally {
    pub fn count_of(&self, category: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.count)
    }

    pub fn categorized(&self) -> u64 {
        self.counts.iter().map(|entry| entry.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub all_time: CategoryTally,
    pub this_month: CategoryTally,
    /// Full month name of the evaluation instant, e.g. "October".
    pub month_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub rows: Vec<NumberedEvent>,
}

/// Everything the dashboard page shows for one request.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    pub last_refresh: Option<DateTime<Utc>>,
    pub summary: DashboardSummary,
    pub page: PageView,
}
