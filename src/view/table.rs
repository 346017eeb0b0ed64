//! Ticket tables.

use crate::model::Ticket;
use crate::query::QueryResult;
use crate::state::ListingState;
use crate::view::text::{fit, row, rule};

struct Column {
    title: &'static str,
    width: usize,
    cell: fn(&Ticket) -> String,
}

const COLUMNS: [Column; 7] = [
    Column { title: "ID", width: 6, cell: |t| format!("#{}", t.id) },
    Column { title: "Title", width: 34, cell: |t| t.title.clone() },
    Column { title: "Customer", width: 18, cell: |t| t.customer.clone() },
    Column { title: "Owner", width: 18, cell: |t| owner_or_unassigned(t).to_string() },
    Column { title: "Category", width: 13, cell: |t| t.category.label().to_string() },
    Column { title: "Severity", width: 8, cell: |t| t.severity.label().to_string() },
    Column { title: "Status", width: 7, cell: |t| t.status.label().to_string() },
];

pub(crate) fn owner_or_unassigned(ticket: &Ticket) -> &str {
    if ticket.owner.is_empty() {
        "Unassigned"
    } else {
        &ticket.owner
    }
}

/// Render tickets as a fixed-width table, or a notice when there are none.
pub fn render_ticket_table<T: AsRef<Ticket>>(tickets: &[&T]) -> String {
    if tickets.is_empty() {
        return "No tickets found.".to_string();
    }

    let header = row(&COLUMNS.iter().map(|c| fit(c.title, c.width)).collect::<Vec<_>>());
    let rule_line = rule(&header);
    let mut lines = vec![header, rule_line];
    for ticket in tickets {
        let ticket = (*ticket).as_ref();
        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|c| fit(&(c.cell)(ticket), c.width))
            .collect();
        lines.push(row(&cells));
    }
    lines.join("\n")
}

/// Render one page of a ticket list with its footer.
pub fn render_listing<T: AsRef<Ticket>>(result: &QueryResult<'_, T>, state: &ListingState) -> String {
    let mut out = render_ticket_table(&result.items);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Showing {} of {} tickets",
        result.items.len(),
        result.total_matches
    ));
    if let Some(spec) = state.sort() {
        out.push_str(&format!(" | sorted by {} ({})", spec.key.name(), spec.direction));
    }
    let filters = state.active_filter_count();
    if filters > 0 {
        out.push_str(&format!(" | {filters} active filter(s)"));
    }
    if result.has_more {
        out.push_str(&format!("\nMore available: --page {}", state.page() + 1));
    }
    out
}
