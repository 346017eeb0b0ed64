//! Dashboard and report aggregates.
//!
//! Every aggregate is recomputed from the ticket collection on demand; nothing
//! is recorded incrementally.

use crate::model::directory::StaffMember;
use crate::model::{Category, Status, Ticket};

// ===== DeskSummary =====

/// Headline counters shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeskSummary {
    /// All tickets.
    pub total: usize,
    /// Tickets in `open` status.
    pub open: usize,
    /// Tickets in `closed` status.
    pub closed: usize,
    /// Sum of `interaction_count` over all tickets.
    pub interactions: u64,
}

impl DeskSummary {
    /// Count `tickets` by status.
    pub fn from_tickets<T: AsRef<Ticket>>(tickets: &[T]) -> Self {
        tickets.iter().map(AsRef::as_ref).fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            match t.status {
                Status::Open => acc.open += 1,
                Status::Closed => acc.closed += 1,
                Status::Pending => {}
            }
            acc.interactions += u64::from(t.interaction_count);
            acc
        })
    }
}

// ===== CategoryReport =====

/// Ticket count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    /// The category counted.
    pub category: Category,
    /// Tickets filed under it.
    pub count: usize,
}

/// The reports screen: distribution by category and resolution rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// One entry per category in declaration order, zeros included.
    pub by_category: Vec<CategoryCount>,
    /// All tickets.
    pub total: usize,
    /// Tickets in `open` status.
    pub open: usize,
    /// Tickets in `closed` status.
    pub closed: usize,
    /// Closed tickets as a rounded percentage of all tickets; 0 when empty.
    pub resolution_rate: u32,
}

impl CategoryReport {
    /// Build the report over `tickets`.
    pub fn from_tickets<T: AsRef<Ticket>>(tickets: &[T]) -> Self {
        let by_category = Category::ALL
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: tickets
                    .iter()
                    .filter(|t| t.as_ref().category == category)
                    .count(),
            })
            .collect();

        let summary = DeskSummary::from_tickets(tickets);

        Self {
            by_category,
            total: summary.total,
            open: summary.open,
            closed: summary.closed,
            resolution_rate: resolution_rate(summary.closed, summary.total),
        }
    }
}

/// `round(closed / total * 100)`, rounding halves up. Returns 0 for an empty desk.
pub fn resolution_rate(closed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let closed = closed as u64;
    let total = total as u64;
    ((closed * 200 + total) / (total * 2)) as u32
}

// ===== Team report =====

/// Ticket workload of one staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberWorkload {
    /// Roster name.
    pub name: String,
    /// Tickets owned.
    pub total: usize,
    /// Owned tickets in `open` status.
    pub open: usize,
    /// Owned tickets in `closed` status.
    pub closed: usize,
}

/// Workload per roster member, busiest first. Ties keep roster order.
pub fn team_report<T: AsRef<Ticket>>(tickets: &[T], roster: &[StaffMember]) -> Vec<MemberWorkload> {
    let mut report: Vec<MemberWorkload> = roster
        .iter()
        .map(|member| {
            let owned: Vec<&Ticket> = tickets
                .iter()
                .map(AsRef::as_ref)
                .filter(|t| t.owner == member.name)
                .collect();
            MemberWorkload {
                name: member.name.to_string(),
                total: owned.len(),
                open: owned.iter().filter(|t| t.status == Status::Open).count(),
                closed: owned.iter().filter(|t| t.status == Status::Closed).count(),
            }
        })
        .collect();

    // stable: equal totals stay in roster order
    report.sort_by(|a, b| b.total.cmp(&a.total));
    report
}
