//! Dashboard, reports and directory listings.

use crate::model::directory::{Team, User};
use crate::model::{CategoryReport, DeskSummary, MemberWorkload, Ticket};
use crate::state::DashboardView;
use crate::view::table::render_ticket_table;
use crate::view::text::{fit, row, rule};

fn table(headers: &[(&str, usize)], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let header = row(&headers.iter().map(|(h, w)| fit(h, *w)).collect::<Vec<_>>());
    let rule_line = rule(&header);
    let mut lines = vec![header, rule_line];
    for cells in rows {
        let fitted: Vec<String> = cells
            .iter()
            .zip(headers)
            .map(|(cell, (_, w))| fit(cell, *w))
            .collect();
        lines.push(row(&fitted));
    }
    lines.join("\n")
}

/// Summary cards as aligned label/value lines.
pub fn render_summary(summary: &DeskSummary) -> String {
    [
        ("Total tickets", summary.total.to_string()),
        ("Open", summary.open.to_string()),
        ("Closed", summary.closed.to_string()),
        ("Interactions", summary.interactions.to_string()),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<16}{value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Summary cards, then the latest and latest closed ticket tables.
pub fn render_dashboard<T: AsRef<Ticket>>(view: &DashboardView<'_, T>) -> String {
    format!(
        "{}\n\nLatest tickets\n{}\n\nLatest closed tickets\n{}",
        render_summary(&view.summary),
        render_ticket_table(&view.latest),
        render_ticket_table(&view.latest_closed)
    )
}

/// Tickets per category followed by the open/closed totals.
pub fn render_category_report(report: &CategoryReport) -> String {
    let rows = report
        .by_category
        .iter()
        .map(|c| vec![c.category.label().to_string(), c.count.to_string()]);
    let mut out = table(&[("Category", 16), ("Tickets", 7)], rows);
    out.push_str(&format!(
        "\n\n{:<16}{}\n{:<16}{}\n{:<16}{}\n{:<16}{}%",
        "Total",
        report.total,
        "Open",
        report.open,
        "Closed",
        report.closed,
        "Resolution rate",
        report.resolution_rate
    ));
    out
}

/// One row per staff member in report order.
pub fn render_team_report(workloads: &[MemberWorkload]) -> String {
    let rows = workloads.iter().map(|w| {
        vec![
            w.name.clone(),
            w.total.to_string(),
            w.open.to_string(),
            w.closed.to_string(),
        ]
    });
    table(&[("Member", 20), ("Total", 5), ("Open", 5), ("Closed", 6)], rows)
}

/// User accounts as a table.
pub fn render_users(users: &[&User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let rows = users.iter().map(|u| {
        vec![
            u.id.to_string(),
            u.name.clone(),
            u.email.clone(),
            u.role.to_string(),
            if u.active { "Active" } else { "Inactive" }.to_string(),
        ]
    });
    table(
        &[("ID", 3), ("Name", 20), ("E-mail", 34), ("Role", 6), ("Status", 8)],
        rows,
    )
}

/// Each team with its description and members.
pub fn render_teams(teams: &[Team]) -> String {
    teams
        .iter()
        .map(|team| {
            let mut block = format!("{} - {}", team.name, team.description);
            for member in team.members {
                block.push_str(&format!("\n  {member}"));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
