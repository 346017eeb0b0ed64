//! Ticket dataset sources.
//!
//! This module provides the two places a dataset can come from:
//! - the built-in sample dataset compiled into the binary
//! - a JSON file on disk
//!
//! Both go through the same parse-and-validate step, so a loaded dataset
//! always has unique ticket and interaction ids, non-blank titles, and every
//! interaction filed under the ticket it names.

use crate::model::error::LoadError;
use crate::model::TicketDetail;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

pub mod builtin;
pub mod file;

/// Where to read tickets from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The sample dataset shipped with the crate.
    Builtin,
    /// A JSON file with the same shape as the built-in dataset.
    File(PathBuf),
}

impl DatasetSource {
    /// File source when a path is given, built-in otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => DatasetSource::File(path),
            None => DatasetSource::Builtin,
        }
    }

    /// Load and validate the dataset.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::FileNotFound` / `LoadError::Io` when the file cannot be read,
    /// `LoadError::InvalidJson` when it does not match the schema, and
    /// `LoadError::DuplicateId`, `LoadError::EmptyTitle`, `LoadError::DuplicateInteractionId`
    /// or `LoadError::MisplacedInteraction` when the dataset breaks an invariant.
    pub fn load(&self) -> Result<Vec<TicketDetail>, LoadError> {
        let tickets = match self {
            DatasetSource::Builtin => parse_dataset(builtin::DATASET)?,
            DatasetSource::File(path) => file::load(path)?,
        };
        tracing::info!(source = ?self, tickets = tickets.len(), "Dataset loaded");
        Ok(tickets)
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    tickets: Vec<TicketDetail>,
}

/// Parse a JSON dataset (`{"tickets": [...]}`) and check its invariants.
pub fn parse_dataset(json: &str) -> Result<Vec<TicketDetail>, LoadError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    validate(&dataset.tickets)?;
    Ok(dataset.tickets)
}

/// Reject datasets with duplicate ids, blank titles or misfiled interactions.
pub fn validate(tickets: &[TicketDetail]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(tickets.len());
    let mut seen_interactions = HashSet::new();
    for detail in tickets {
        let id = detail.ticket.id;
        if !seen.insert(id) {
            return Err(LoadError::DuplicateId { id });
        }
        if detail.ticket.title.trim().is_empty() {
            return Err(LoadError::EmptyTitle { id });
        }
        for interaction in &detail.interactions {
            if interaction.ticket_id != id {
                return Err(LoadError::MisplacedInteraction {
                    id: interaction.id,
                    claimed: interaction.ticket_id,
                    parent: id,
                });
            }
            if !seen_interactions.insert(interaction.id) {
                return Err(LoadError::DuplicateInteractionId { id: interaction.id });
            }
        }
    }
    Ok(())
}
