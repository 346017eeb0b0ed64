//! In-memory desk: a mutable copy of the loaded dataset.
//!
//! Form submissions land here and live only as long as the process.

use crate::model::error::FormError;
use crate::model::{
    Category, Interaction, InteractionId, Severity, Status, Ticket, TicketDetail, TicketId,
};
use crate::state::forms::{NewInteractionDraft, NewTicketDraft};
use chrono::NaiveDateTime;
use tracing::{info, warn};

/// Display format of timestamps written by the desk.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The working ticket collection. Ids and timestamps of new records are
/// assigned here.
#[derive(Debug, Clone, Default)]
pub struct Desk {
    tickets: Vec<TicketDetail>,
}

impl Desk {
    /// Wrap an already validated dataset.
    pub fn new(tickets: Vec<TicketDetail>) -> Self {
        Self { tickets }
    }

    /// Every ticket, in dataset order followed by tickets opened this run.
    pub fn tickets(&self) -> &[TicketDetail] {
        &self.tickets
    }

    /// The ticket with `id`, if any.
    pub fn get(&self, id: TicketId) -> Option<&TicketDetail> {
        self.tickets.iter().find(|d| d.ticket.id == id)
    }

    /// Tickets owned by `owner`, in dataset order.
    pub fn owned_by(&self, owner: &str) -> Vec<&TicketDetail> {
        self.tickets
            .iter()
            .filter(|d| d.ticket.owner == owner)
            .collect()
    }

    fn next_ticket_id(&self) -> TicketId {
        self.tickets
            .iter()
            .map(|d| d.ticket.id)
            .max()
            .map_or(TicketId::FIRST, TicketId::next)
    }

    fn next_interaction_id(&self) -> InteractionId {
        self.tickets
            .iter()
            .flat_map(|d| d.interactions.iter().map(|i| i.id))
            .max()
            .map_or(InteractionId::new(1), InteractionId::next)
    }

    /// Validate and append a new ticket. It starts open, unassigned and without history.
    pub fn submit_ticket(
        &mut self,
        draft: NewTicketDraft,
        requester: &str,
        now: NaiveDateTime,
    ) -> Result<&TicketDetail, FormError> {
        if let Err(err) = draft.validate() {
            warn!(error = %err, "New ticket rejected");
            return Err(err);
        }

        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        let detail = TicketDetail {
            ticket: Ticket {
                id: self.next_ticket_id(),
                title: draft.title.trim().to_string(),
                owner: String::new(),
                customer: String::new(),
                created_at: stamp.clone(),
                interaction_count: 0,
                last_interaction_at: stamp,
                // unclassified tickets are filed as Support
                category: draft.category.unwrap_or(Category::Support),
                severity: draft.severity.unwrap_or(Severity::Medium),
                status: Status::Open,
                tool: draft.tool,
                internal_status: None,
                delivery_date: None,
                description: Some(draft.description.trim().to_string()),
            },
            requester: requester.to_string(),
            interactions: Vec::new(),
        };

        info!(id = %detail.ticket.id, attachments = draft.attachments.len(), "Ticket created");
        let index = self.tickets.len();
        self.tickets.push(detail);
        Ok(&self.tickets[index])
    }

    /// Validate and append an interaction to ticket `id`, applying any reassignment.
    pub fn submit_interaction(
        &mut self,
        id: TicketId,
        draft: NewInteractionDraft,
        author: &str,
        now: NaiveDateTime,
    ) -> Result<&Interaction, FormError> {
        if let Err(err) = draft.validate() {
            warn!(ticket = %id, error = %err, "Interaction rejected");
            return Err(err);
        }
        let interaction_id = self.next_interaction_id();
        let recipients = draft.effective_recipients();

        let detail = self
            .tickets
            .iter_mut()
            .find(|d| d.ticket.id == id)
            .ok_or(FormError::UnknownTicket { id })?;

        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        let ticket = &mut detail.ticket;
        ticket.interaction_count = ticket.interaction_count.saturating_add(1);
        ticket.last_interaction_at = stamp.clone();
        if let Some(owner) = draft.owner {
            ticket.owner = owner;
        }
        if let Some(severity) = draft.severity {
            ticket.severity = severity;
        }
        if let Some(category) = draft.category {
            ticket.category = category;
        }
        if let Some(tool) = draft.tool {
            ticket.tool = Some(tool);
        }
        if let Some(status) = draft.internal_status {
            ticket.internal_status = Some(status);
        }
        if let Some(date) = draft.delivery_date {
            ticket.delivery_date = Some(date);
        }

        let index = detail.interactions.len();
        detail.interactions.push(Interaction {
            id: interaction_id,
            ticket_id: id,
            author: author.to_string(),
            timestamp: stamp,
            visibility: draft.visibility,
            message: draft.message.trim().to_string(),
            attachments: draft.attachments,
            recipients,
        });

        info!(ticket = %id, interaction = %interaction_id, "Interaction added");
        Ok(&detail.interactions[index])
    }
}
