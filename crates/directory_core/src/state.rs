use std::num::NonZeroUsize;
use std::sync::Arc;

use directory_logging::directory_debug;

use crate::query::{clamp_page, matching_positions, paginate, total_pages};
use crate::view_model::ViewResult;
use crate::RecordStore;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => unreachable!(),
};

/// What happens to the page cursor when the query text changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryChangePolicy {
    /// Always return to the top of the results.
    #[default]
    ResetToFirstPage,
    /// Stay on the current page if the new result set still has it,
    /// otherwise return to the first page.
    KeepPageIfValid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub page_size: NonZeroUsize,
    pub query_change: QueryChangePolicy,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            query_change: QueryChangePolicy::default(),
        }
    }
}

/// The user-controlled part of the view: search text and page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl QueryState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size,
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Owned state of one directory view.
///
/// Holds a shared handle to the immutable store, the current [`QueryState`]
/// and the positions of the records matching the current query. Only
/// [`crate::update`] mutates it; [`DirectoryState::view`] derives the
/// [`ViewResult`] without side effects. The default state views an empty store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    store: Arc<RecordStore>,
    query_change: QueryChangePolicy,
    query: QueryState,
    matches: Vec<usize>,
    dirty: bool,
}

impl DirectoryState {
    pub fn new(store: Arc<RecordStore>, config: DirectoryConfig) -> Self {
        let matches = (0..store.len()).collect();
        Self {
            store,
            query_change: config.query_change,
            query: QueryState::new(config.page_size),
            matches,
            dirty: false,
        }
    }

    pub fn with_defaults(store: Arc<RecordStore>) -> Self {
        Self::new(store, DirectoryConfig::default())
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn query(&self) -> &str {
        &self.query.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matches.len(), self.query.page_size)
    }

    pub fn view(&self) -> ViewResult {
        let records = self.store.all();
        let page_size = self.query.page_size;
        let current = i64::try_from(self.query.page).unwrap_or(i64::MAX);
        let page = paginate(&self.matches, page_size, current);
        ViewResult {
            query: self.query.query.clone(),
            visible: page
                .items
                .iter()
                .map(|&index| records[index].clone())
                .collect(),
            total_matches: page.total_items,
            total_records: records.len(),
            total_pages: page.total_pages,
            page: page.page,
            page_size,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn apply_query(&mut self, query: String) {
        let matches = matching_positions(self.store.all(), &query);

        let total = total_pages(matches.len(), self.query.page_size);
        let page = match self.query_change {
            QueryChangePolicy::ResetToFirstPage => 1,
            QueryChangePolicy::KeepPageIfValid if self.query.page <= total => self.query.page,
            QueryChangePolicy::KeepPageIfValid => 1,
        };

        directory_debug!(
            "query {:?} -> {:?}: {} matches, page {} of {}",
            self.query.query,
            query,
            matches.len(),
            page,
            total
        );

        if query != self.query.query || matches != self.matches || page != self.query.page {
            self.dirty = true;
        }
        self.query.query = query;
        self.query.page = page;
        self.matches = matches;
    }

    pub(crate) fn request_page(&mut self, requested: i64) {
        let page = clamp_page(requested, self.total_pages());
        if page == self.query.page {
            return;
        }
        directory_debug!(
            "page {} -> {} (requested {}, {} pages)",
            self.query.page,
            page,
            requested,
            self.total_pages()
        );
        self.query.page = page;
        self.dirty = true;
    }

    pub(crate) fn step_page(&mut self, delta: i64) {
        let current = i64::try_from(self.query.page).unwrap_or(i64::MAX);
        self.request_page(current.saturating_add(delta));
    }
}
