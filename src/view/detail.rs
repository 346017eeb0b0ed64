//! Ticket detail and interaction history.

use crate::model::directory::tool_label;
use crate::model::{Interaction, TicketDetail};
use crate::state::{DetailState, HistoryOrder};
use crate::view::table::owner_or_unassigned;

fn field(lines: &mut Vec<String>, label: &str, value: &str) {
    lines.push(format!("{:<18}{}", format!("{label}:"), value));
}

/// Render a ticket with its history in the order chosen by `state`.
pub fn render_detail(detail: &TicketDetail, state: &DetailState) -> String {
    let ticket = &detail.ticket;
    let mut lines = vec![format!("#{} {}", ticket.id, ticket.title), String::new()];

    field(&mut lines, "Status", ticket.status.label());
    field(&mut lines, "Severity", ticket.severity.label());
    field(&mut lines, "Category", ticket.category.label());
    field(&mut lines, "Customer", &ticket.customer);
    field(&mut lines, "Requester", &detail.requester);
    field(&mut lines, "Owner", owner_or_unassigned(ticket));
    if let Some(tool) = &ticket.tool {
        field(&mut lines, "Tool", tool_label(tool));
    }
    if let Some(status) = ticket.internal_status {
        field(&mut lines, "Internal status", status.label());
    }
    if let Some(date) = &ticket.delivery_date {
        field(&mut lines, "Delivery date", date);
    }
    field(&mut lines, "Created", &ticket.created_at);
    field(&mut lines, "Last interaction", &ticket.last_interaction_at);

    if let Some(description) = ticket.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.extend(description.lines().map(|l| format!("  {l}")));
    }

    let history = state.history(detail);
    lines.push(String::new());
    let order = match state.order() {
        HistoryOrder::NewestFirst => "newest first",
        HistoryOrder::OldestFirst => "oldest first",
    };
    lines.push(format!("History ({}, {order}):", history.len()));
    if history.is_empty() {
        lines.push("  No interactions yet.".to_string());
    }
    for interaction in history {
        render_interaction(&mut lines, interaction);
    }

    lines.join("\n")
}

fn render_interaction(lines: &mut Vec<String>, interaction: &Interaction) {
    lines.push(format!(
        "[{}] {} ({})",
        interaction.timestamp,
        interaction.author,
        interaction.visibility.label()
    ));
    lines.extend(interaction.message.lines().map(|l| format!("  {l}")));
    let recipients = interaction.visible_recipients();
    if !recipients.is_empty() {
        lines.push(format!("  Recipients: {}", recipients.join("; ")));
    }
    if !interaction.attachments.is_empty() {
        let names: Vec<&str> = interaction.attachments.iter().map(|a| a.name.as_str()).collect();
        lines.push(format!("  Attachments: {}", names.join(", ")));
    }
}
