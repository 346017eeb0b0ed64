//! Dashboard state: summary cards and the two "latest" tables.

use crate::model::{Category, DeskSummary, Severity, Status, Ticket};
use crate::query::{self, FilterCriteria, SortKey, SortSpec};

/// Number of rows in each dashboard table when not configured.
pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// Search and filters shared by both dashboard tables. Status is never constrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Free-text search, as in the ticket list.
    pub search: String,
    /// Category constraint.
    pub category: Option<Category>,
    /// Severity constraint.
    pub severity: Option<Severity>,
}

/// One rendering of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView<'a, T> {
    /// Counters over the unfiltered collection.
    pub summary: DeskSummary,
    /// Most recently registered tickets, newest first.
    pub latest: Vec<&'a T>,
    /// Most recently registered closed tickets, newest first.
    pub latest_closed: Vec<&'a T>,
}

impl DashboardState {
    /// These parameters as list criteria.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            category: self.category,
            severity: self.severity,
            status: None,
        }
    }

    /// True when any search text or constraint is set.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.severity.is_some()
    }

    /// Drop the search text and every constraint.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    /// Summary over the whole collection; tables filtered and cut to `limit` rows.
    pub fn view<'a, T: AsRef<Ticket>>(
        &self,
        records: &'a [T],
        limit: usize,
    ) -> DashboardView<'a, T> {
        let all: Vec<&T> = records.iter().collect();
        let newest_first = query::sort(&all, SortSpec::descending(SortKey::Id));
        let closed: Vec<&T> = newest_first
            .iter()
            .copied()
            .filter(|t| t.as_ref().status == Status::Closed)
            .collect();

        let latest_pool = &newest_first[..limit.min(newest_first.len())];
        let closed_pool = &closed[..limit.min(closed.len())];

        let criteria = self.criteria();
        DashboardView {
            summary: DeskSummary::from_tickets(records),
            latest: query::filter(latest_pool, &criteria).into_iter().copied().collect(),
            latest_closed: query::filter(closed_pool, &criteria).into_iter().copied().collect(),
        }
    }
}
