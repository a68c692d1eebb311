use contracts::shared::pagination::{PageRequest, PageResult};
use leptos::prelude::*;

use crate::shared::api_error::ApiError;
use crate::shared::pagination::total_pages;

/// What a list page does with a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Show the table's error state with a retry button
    Surface,
    /// Log and show an empty table
    #[default]
    Swallow,
}

/// Monotonic fetch counter; only the latest request may update the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Superseded by a later request; nothing changed
    Stale,
    /// The page no longer exists; the page number was clamped and must be refetched
    Refetch,
    Failed,
}

/// Parameters that define which page is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
}

impl ListQuery {
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

#[derive(Debug, Clone)]
pub struct ListPageState<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    sequence: RequestSequence,
}

impl<T> ListPageState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            loading: false,
            error: None,
            sequence: RequestSequence::default(),
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            search: self.search.clone(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    /// Mark a fetch as started and return its request id
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.sequence.begin()
    }

    pub fn apply(
        &mut self,
        request_id: u64,
        result: Result<PageResult<T>, ApiError>,
        policy: FailurePolicy,
    ) -> ApplyOutcome {
        if !self.sequence.is_current(request_id) {
            log::debug!("Dropping stale list response #{}", request_id);
            return ApplyOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.error = None;
                self.total = page.total;
                let last = self.total_pages();
                if last > 0 && self.page > last {
                    self.page = last;
                    self.loading = true;
                    return ApplyOutcome::Refetch;
                }
                self.items = page.items;
                ApplyOutcome::Applied
            }
            Err(e) => {
                log::warn!("List fetch failed: {}", e);
                self.items.clear();
                self.total = 0;
                self.error = match policy {
                    FailurePolicy::Surface => Some(e.user_message()),
                    FailurePolicy::Swallow => None,
                };
                ApplyOutcome::Failed
            }
        }
    }

    /// Clamped to the known page range
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        if size != self.page_size {
            self.page_size = size;
            self.page = 1;
        }
    }

    /// Returns whether the search text changed; a change resets to page 1
    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if search == self.search {
            return false;
        }
        self.search = search.to_string();
        self.page = 1;
        true
    }
}

pub fn create_state<T: Send + Sync + 'static>(page_size: usize) -> RwSignal<ListPageState<T>> {
    RwSignal::new(ListPageState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total: usize) -> Result<PageResult<u32>, ApiError> {
        Ok(PageResult::new(items, total))
    }

    #[test]
    fn test_latest_request_wins() {
        let mut state = ListPageState::<u32>::new(10);
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert_eq!(state.apply(second, page(vec![2], 1), FailurePolicy::Swallow), ApplyOutcome::Applied);
        assert_eq!(state.apply(first, page(vec![1], 1), FailurePolicy::Swallow), ApplyOutcome::Stale);
        assert_eq!(state.items, vec![2]);
        assert!(!state.loading);
    }

    #[test]
    fn test_swallow_degrades_to_empty() {
        let mut state = ListPageState::<u32>::new(10);
        let id = state.begin_fetch();
        state.apply(id, page(vec![1, 2], 2), FailurePolicy::Swallow);

        let id = state.begin_fetch();
        let outcome = state.apply(id, Err(ApiError::Network { timeout: false }), FailurePolicy::Swallow);
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(state.items.is_empty());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_surface_sets_error_message() {
        let mut state = ListPageState::<u32>::new(10);
        let id = state.begin_fetch();
        state.apply(
            id,
            Err(ApiError::Status { status: 403, detail: None }),
            FailurePolicy::Surface,
        );
        assert_eq!(
            state.error.as_deref(),
            Some("You do not have permission to perform this action.")
        );
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let mut state = ListPageState::<u32>::new(10);
        state.total = 50;
        state.set_page(5);
        let id = state.begin_fetch();
        // Records were deleted elsewhere: only 2 pages remain
        let outcome = state.apply(id, page(vec![], 15), FailurePolicy::Swallow);
        assert_eq!(outcome, ApplyOutcome::Refetch);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut state = ListPageState::<u32>::new(10);
        state.total = 100;
        state.set_page(4);
        assert!(state.set_search(" para "));
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "para");
        assert!(!state.set_search("para"));

        state.set_page(3);
        state.set_page_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.query().request(), PageRequest::new(1, 50));
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = ListPageState::<u32>::new(20);
        state.total = 45;
        state.set_page(0);
        assert_eq!(state.page, 1);
        state.set_page(9);
        assert_eq!(state.page, 3);
    }
}
