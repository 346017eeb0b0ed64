//! Free-text and categorical filtering.

use crate::model::{Category, Severity, Status, Ticket};
use std::str::FromStr;

/// Filter parameters. `None` on a categorical field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against id, title, owner and customer.
    pub search: String,
    /// Only tickets of this category.
    pub category: Option<Category>,
    /// Only tickets of this severity.
    pub severity: Option<Severity>,
    /// Only tickets in this status.
    pub status: Option<Status>,
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Replace the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Constrain to one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Constrain to one severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Constrain to one status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// True when every predicate of these criteria accepts `ticket`.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        Matcher::new(self).matches(ticket)
    }
}

/// Criteria with the search text lowered once, reused across a whole collection.
struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search.to_lowercase(),
        }
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_search(ticket)
            && self.criteria.category.map_or(true, |c| ticket.category == c)
            && self.criteria.severity.map_or(true, |s| ticket.severity == s)
            && self.criteria.status.map_or(true, |s| ticket.status == s)
    }

    fn matches_search(&self, ticket: &Ticket) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        ticket.id.to_string().contains(&self.needle)
            || ticket.title.to_lowercase().contains(&self.needle)
            || ticket.owner.to_lowercase().contains(&self.needle)
            || ticket.customer.to_lowercase().contains(&self.needle)
    }
}

/// Records matching all active predicates, in input order.
pub fn filter<'a, T: AsRef<Ticket>>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let matcher = Matcher::new(criteria);
    records
        .iter()
        .filter(|record| matcher.matches(record.as_ref()))
        .collect()
}

/// Parse a categorical constraint where `all` (or an empty string) means "no constraint".
pub fn parse_constraint<T: FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        trimmed.parse().map(Some)
    }
}
