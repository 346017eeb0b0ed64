//! Ticket records and their classification enumerations.

use crate::model::{Interaction, TicketId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A string did not name any variant of a ticket enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownVariant {
    /// Enumeration being parsed ("category", "severity", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted values.
    pub expected: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str, labels: impl Iterator<Item = &'static str>) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: labels.collect::<Vec<_>>().join(", "),
        }
    }
}

// ===== Category =====

/// Nature of a ticket (its classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Something is broken.
    Bug,
    /// Help with using the product.
    Support,
    /// Connection with a third-party system.
    Integration,
    /// Customer-specific change.
    Customization,
    /// Enhancement request.
    Improvement,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Bug,
        Category::Support,
        Category::Integration,
        Category::Customization,
        Category::Improvement,
    ];

    /// Display label, identical to the wire name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Bug => "Bug",
            Category::Support => "Support",
            Category::Integration => "Integration",
            Category::Customization => "Customization",
            Category::Improvement => "Improvement",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("category", s, Self::ALL.iter().map(|c| c.label())))
    }
}

// ===== Severity =====

/// Priority tier of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks the customer's operation.
    High,
    /// Degraded but workable.
    Medium,
    /// Cosmetic or low impact.
    Low,
}

impl Severity {
    /// All severities, most urgent first.
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    /// Display label, identical to the wire name.
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("severity", s, Self::ALL.iter().map(|v| v.label())))
    }
}

// ===== Status =====

/// Customer-facing lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Awaiting work from the support team.
    Open,
    /// Resolved.
    Closed,
    /// Waiting on the customer or a third party.
    Pending,
}

impl Status {
    /// All statuses in declaration order.
    pub const ALL: [Status; 3] = [Status::Open, Status::Closed, Status::Pending];

    /// Wire name, as stored in datasets and compared when sorting.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Closed => "closed",
            Status::Pending => "pending",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("status", s, Self::ALL.iter().map(|v| v.as_str())))
    }
}

// ===== InternalStatus =====

/// Progress of a ticket inside the development pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalStatus {
    /// Not yet triaged by development.
    #[serde(rename = "Pending analysis")]
    PendingAnalysis,
    /// Being worked on.
    #[serde(rename = "In development")]
    InDevelopment,
    /// Fix under test.
    #[serde(rename = "In testing")]
    InTesting,
    /// Done, waiting for the next release.
    #[serde(rename = "Awaiting release")]
    AwaitingRelease,
    /// Shipped.
    #[serde(rename = "Released")]
    Released,
}

impl InternalStatus {
    /// Pipeline stages in order.
    pub const ALL: [InternalStatus; 5] = [
        InternalStatus::PendingAnalysis,
        InternalStatus::InDevelopment,
        InternalStatus::InTesting,
        InternalStatus::AwaitingRelease,
        InternalStatus::Released,
    ];

    /// Display label, identical to the wire name.
    pub fn label(self) -> &'static str {
        match self {
            InternalStatus::PendingAnalysis => "Pending analysis",
            InternalStatus::InDevelopment => "In development",
            InternalStatus::InTesting => "In testing",
            InternalStatus::AwaitingRelease => "Awaiting release",
            InternalStatus::Released => "Released",
        }
    }
}

impl fmt::Display for InternalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InternalStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                UnknownVariant::new("internal status", s, Self::ALL.iter().map(|v| v.label()))
            })
    }
}

// ===== Ticket =====

/// A single support request, as listed in ticket tables.
///
/// Date fields are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique, positive ticket number.
    pub id: TicketId,
    /// One-line summary.
    pub title: String,
    /// Staff member responsible; empty when unassigned.
    pub owner: String,
    /// Customer (pharmacy or chain) that opened the ticket.
    pub customer: String,
    /// `YYYY-MM-DD HH:MM`.
    pub created_at: String,
    /// Number of interactions in the history.
    pub interaction_count: u32,
    /// `YYYY-MM-DD HH:MM` of the latest interaction.
    pub last_interaction_at: String,
    /// Classification.
    pub category: Category,
    /// Priority tier.
    pub severity: Severity,
    /// Customer-facing state.
    pub status: Status,
    /// Tool slug from the catalogue (see `directory::TOOLS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Development pipeline stage, for tickets that reached development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_status: Option<InternalStatus>,
    /// Promised delivery date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    /// Free-text description written when the ticket was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AsRef<Ticket> for Ticket {
    fn as_ref(&self) -> &Ticket {
        self
    }
}

// ===== TicketDetail =====

/// A ticket together with its requester and interaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetail {
    /// The listed fields.
    #[serde(flatten)]
    pub ticket: Ticket,
    /// Person who reported the problem on the customer side.
    pub requester: String,
    /// Interaction history, oldest first.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl AsRef<Ticket> for TicketDetail {
    fn as_ref(&self) -> &Ticket {
        &self.ticket
    }
}
