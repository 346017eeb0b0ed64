//! Record identifier newtypes with smart constructors.
//!
//! Ticket ids are positive integers; zero is rejected at construction and at
//! the deserialization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a ticket within a dataset.
/// NEVER export the constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TicketId(u64);

impl TicketId {
    /// The lowest valid id.
    pub const FIRST: TicketId = TicketId(1);

    /// Smart constructor: validates the id is positive.
    pub fn new(raw: u64) -> Result<Self, InvalidTicketId> {
        if raw == 0 {
            Err(InvalidTicketId::Zero)
        } else {
            Ok(Self(raw))
        }
    }

    /// The raw number.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u64> for TicketId {
    type Error = InvalidTicketId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<TicketId> for u64 {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

impl FromStr for TicketId {
    type Err = InvalidTicketId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        let raw = trimmed
            .parse::<u64>()
            .map_err(|_| InvalidTicketId::NotANumber(s.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an interaction. Unique across the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionId(u64);

impl InteractionId {
    /// Wrap a raw number. Any value is accepted.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw number.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Rejected ticket id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTicketId {
    /// Ids start at 1.
    #[error("Ticket ID must be a positive integer")]
    Zero,
    /// The text was not an unsigned integer.
    #[error("Ticket ID '{0}' is not a number")]
    NotANumber(String),
}

// ===== Tests =====
