use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use crate::Record;

/// Snapshot of what the directory should display for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResult {
    pub query: String,
    /// Records on the current page, in source order.
    pub visible: Vec<Record>,
    pub total_matches: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl ViewResult {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Pagination controls are only worth showing with more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// True when the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// "Showing N members (out of M total)", only while a search is active.
    pub fn result_summary(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let noun = if self.total_matches == 1 {
            "member"
        } else {
            "members"
        };
        Some(format!(
            "Showing {} {} (out of {} total)",
            self.total_matches, noun, self.total_records
        ))
    }
}
