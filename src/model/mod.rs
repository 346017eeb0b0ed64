//! Domain model types (pure).
//!
//! Tickets, interactions, the staff directory and report aggregates. Nothing in
//! this module performs I/O.

pub mod directory;
pub mod error;
pub mod identifiers;
pub mod interaction;
pub mod stats;
pub mod ticket;

// Re-export for convenience
pub use identifiers::{InteractionId, InvalidTicketId, TicketId};
pub use interaction::{Attachment, Interaction, Visibility};
pub use stats::{CategoryCount, CategoryReport, DeskSummary, MemberWorkload};
pub use ticket::{Category, InternalStatus, Severity, Status, Ticket, TicketDetail, UnknownVariant};

#[cfg(test)]
pub(crate) mod test_support {
    //! Builders shared by unit tests across the crate.

    use super::*;

    /// A ticket with neutral defaults: open, Bug, Medium, no optional fields.
    pub fn ticket(id: u64, title: &str) -> Ticket {
        Ticket {
            id: TicketId::new(id).expect("test ids are positive"),
            title: title.to_string(),
            owner: "Giovana Lana".to_string(),
            customer: "Rede Bem Estar".to_string(),
            created_at: "2025-01-01 09:00".to_string(),
            interaction_count: 0,
            last_interaction_at: "2025-01-01 09:00".to_string(),
            category: Category::Bug,
            severity: Severity::Medium,
            status: Status::Open,
            tool: None,
            internal_status: None,
            delivery_date: None,
            description: None,
        }
    }

    /// Wrap a ticket in a detail record with an empty history.
    pub fn detail(ticket: Ticket) -> TicketDetail {
        TicketDetail {
            ticket,
            requester: "Carlos Mendes".to_string(),
            interactions: Vec::new(),
        }
    }
}
