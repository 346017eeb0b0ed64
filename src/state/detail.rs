//! Ticket detail screen state.

use crate::model::{Interaction, TicketDetail};

/// Order in which the interaction history is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryOrder {
    /// Latest interaction on top.
    #[default]
    NewestFirst,
    /// Stored order.
    OldestFirst,
}

impl HistoryOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::NewestFirst => HistoryOrder::OldestFirst,
            HistoryOrder::OldestFirst => HistoryOrder::NewestFirst,
        }
    }
}

/// Parameters of the ticket detail screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailState {
    order: HistoryOrder,
}

impl DetailState {
    /// Start with the history in `order`.
    pub fn new(order: HistoryOrder) -> Self {
        Self { order }
    }

    /// Current history order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Flip between newest-first and oldest-first.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    /// The ticket's history in display order. Stored history is oldest first.
    pub fn history<'a>(&self, detail: &'a TicketDetail) -> Vec<&'a Interaction> {
        match self.order {
            HistoryOrder::OldestFirst => detail.interactions.iter().collect(),
            HistoryOrder::NewestFirst => detail.interactions.iter().rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{detail, ticket};
    use crate::model::{InteractionId, Visibility};

    fn with_history(n: u64) -> TicketDetail {
        let mut d = detail(ticket(1, "Printer"));
        for i in 1..=n {
            d.interactions.push(Interaction {
                id: InteractionId::new(i),
                ticket_id: d.ticket.id,
                author: "Ana Beatriz".to_string(),
                timestamp: format!("2025-01-0{i} 10:00"),
                visibility: Visibility::Public,
                message: format!("message {i}"),
                attachments: Vec::new(),
                recipients: Vec::new(),
            });
        }
        d
    }

    #[test]
    fn default_order_is_newest_first() {
        let d = with_history(3);
        let ids: Vec<u64> = DetailState::default().history(&d).iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn toggle_switches_to_oldest_first() {
        let d = with_history(3);
        let mut state = DetailState::default();
        state.toggle_order();
        assert_eq!(state.order(), HistoryOrder::OldestFirst);
        let ids: Vec<u64> = state.history(&d).iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_history_is_empty_in_both_orders() {
        let d = with_history(0);
        assert!(DetailState::new(HistoryOrder::OldestFirst).history(&d).is_empty());
        assert!(DetailState::new(HistoryOrder::NewestFirst).history(&d).is_empty());
    }
}
