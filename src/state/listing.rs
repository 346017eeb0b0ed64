//! Ticket list state machine.
//!
//! Holds the parameters of the "all tickets" screen and re-derives the visible
//! set from them on demand. Any change to what is matched sends the user back
//! to the first page.

use crate::model::{Category, Severity, Status, Ticket};
use crate::query::{self, FilterCriteria, QueryResult, SortDirection, SortKey, SortSpec};

/// Page size used when no configuration overrides it.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Page sizes offered by the list screen.
pub const PER_PAGE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Parameters of the ticket list: criteria, sort, page and page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
    page: usize,
    per_page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListingState {
    /// Fresh state on page 1, unfiltered and unsorted.
    pub fn new(per_page: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: None,
            page: 1,
            per_page,
        }
    }

    /// Current filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current sort, `None` for dataset order.
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Number of pages revealed, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Tickets per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Replace the search text and return to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.page = 1;
    }

    /// Set or clear the category constraint and return to page 1.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.criteria.category = category;
        self.page = 1;
    }

    /// Set or clear the severity constraint and return to page 1.
    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.criteria.severity = severity;
        self.page = 1;
    }

    /// Set or clear the status constraint and return to page 1.
    pub fn set_status(&mut self, status: Option<Status>) {
        self.criteria.status = status;
        self.page = 1;
    }

    /// Change the page size and return to page 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page;
        self.page = 1;
    }

    /// Replace the sort spec outright.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Column-header click: unsorted → ascending → descending → unsorted.
    ///
    /// Clicking a different column starts again at ascending on that column.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Ascending => Some(SortSpec::descending(key)),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec::ascending(key)),
        };
    }

    /// Reset search and categorical constraints. Sort and page size are kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page = 1;
    }

    /// True when any search text or constraint is set.
    pub fn has_active_filters(&self) -> bool {
        !self.criteria.search.is_empty()
            || self.criteria.category.is_some()
            || self.criteria.severity.is_some()
            || self.criteria.status.is_some()
    }

    /// Number of categorical constraints set. Search text is not counted.
    pub fn active_filter_count(&self) -> usize {
        [
            self.criteria.category.is_some(),
            self.criteria.severity.is_some(),
            self.criteria.status.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Reveal the next page if `records` has anything left to show.
    ///
    /// Returns whether the page advanced.
    pub fn load_more<T: AsRef<Ticket>>(&mut self, records: &[T]) -> bool {
        if self.view(records).has_more {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Visible records for the current parameters.
    pub fn view<'a, T: AsRef<Ticket>>(&self, records: &'a [T]) -> QueryResult<'a, T> {
        query::run(records, &self.criteria, self.sort, self.page, self.per_page)
    }
}
