//! Sample dataset compiled into the binary.

/// Thirty-odd tickets with interaction histories, covering every category,
/// severity and status.
pub const DATASET: &str = include_str!("../../data/tickets.json");
