//! Ticket query pipeline (pure).
//!
//! Three stateless operations over an in-memory collection, run in order on
//! every parameter change: [`filter`] → [`sort`] → [`paginate`]. None of them
//! mutates its input.

pub mod collation;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use collation::collate;
pub use filter::{filter, parse_constraint, FilterCriteria};
pub use paginate::{has_more, paginate};
pub use sort::{compare, sort, SortDirection, SortKey, SortSpec};

use crate::model::Ticket;

/// Everything a ticket list needs to render one state of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a, T> {
    /// The visible prefix, in display order.
    pub items: Vec<&'a T>,
    /// Number of records that passed the filter.
    pub total_matches: usize,
    /// Whether "load more" would reveal anything.
    pub has_more: bool,
}

/// Run filter, optional sort and pagination in one go.
pub fn run<'a, T: AsRef<Ticket>>(
    records: &'a [T],
    criteria: &FilterCriteria,
    sort_spec: Option<SortSpec>,
    page: usize,
    per_page: usize,
) -> QueryResult<'a, T> {
    let filtered = filter(records, criteria);
    let ordered = match sort_spec {
        Some(spec) => sort(&filtered, spec),
        None => filtered,
    };
    let visible = paginate(&ordered, page, per_page);

    tracing::debug!(
        records = records.len(),
        matches = ordered.len(),
        visible = visible.len(),
        "Ticket query evaluated"
    );

    QueryResult {
        has_more: visible.len() < ordered.len(),
        total_matches: ordered.len(),
        items: visible.to_vec(),
    }
}
