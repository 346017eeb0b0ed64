//! Error types for the helpdesk application.
//!
//! The query functions are total and have no error type. Everything that can
//! fail sits at an edge: loading a dataset, reading configuration, installing
//! the log subscriber, submitting a form, or looking up a ticket by id.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned by command handlers
//!   - [`LoadError`] - dataset file or JSON failures, dataset invariant violations
//!   - [`crate::config::ConfigError`] - unreadable or invalid configuration file
//!   - [`crate::logging::LoggingError`] - log file setup failures
//!   - [`FormError`] - rejected form submissions
//!
//! All of them compose via `?` through `From` conversions.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::ticket::UnknownVariant;
use crate::model::{InteractionId, TicketId};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The ticket dataset could not be loaded. Fatal.
    #[error("Failed to load tickets: {0}")]
    Load(#[from] LoadError),

    /// The configuration file exists but is unusable. Fatal.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be set up. Fatal.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// No ticket has the requested id.
    ///
    /// The detail screen reports this instead of rendering.
    #[error("Ticket #{id} not found")]
    TicketNotFound {
        /// The id that was looked up.
        id: TicketId,
    },

    /// A form submission was rejected.
    #[error(transparent)]
    Form(#[from] FormError),

    /// A command-line value did not name a known variant.
    #[error(transparent)]
    InvalidValue(#[from] UnknownVariant),
}

/// Errors encountered while loading a ticket dataset.
///
/// Any of these aborts the load; a dataset is either accepted whole or not at all.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use helpdesk::model::error::LoadError;
    ///
    /// let err = LoadError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error while reading the dataset file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON, or does not match the ticket schema.
    ///
    /// Line and column are 1-based.
    #[error("Invalid dataset at line {line}, column {column}: {message}")]
    InvalidJson {
        /// Line of the offending token.
        line: usize,
        /// Column of the offending token.
        column: usize,
        /// Parser message without its position suffix.
        message: String,
    },

    /// Two tickets share an id.
    #[error("Duplicate ticket id {id}")]
    DuplicateId {
        /// The repeated id.
        id: TicketId,
    },

    /// A ticket has a blank title.
    #[error("Ticket {id} has an empty title")]
    EmptyTitle {
        /// The offending ticket.
        id: TicketId,
    },

    /// Two interactions share an id, in the same ticket or in different ones.
    #[error("Duplicate interaction id {id}")]
    DuplicateInteractionId {
        /// The repeated id.
        id: InteractionId,
    },

    /// An interaction names a different ticket than the one holding it.
    #[error("Interaction {id} belongs to ticket {claimed} but is stored under ticket {parent}")]
    MisplacedInteraction {
        /// The interaction.
        id: InteractionId,
        /// Its `ticketId` field.
        claimed: TicketId,
        /// The ticket whose history contains it.
        parent: TicketId,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        let (line, column) = (err.line(), err.column());
        let full = err.to_string();
        let position = format!(" at line {line} column {column}");
        let message = full.strip_suffix(position.as_str()).unwrap_or(full.as_str()).to_string();
        LoadError::InvalidJson {
            line,
            column,
            message,
        }
    }
}

/// Field-level validation failures of a form, keyed by field name.
///
/// Every failing field is reported at once, not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// No failures yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message for it.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Names of the failing fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), FormError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

/// A form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more fields failed validation.
    #[error("Invalid form: {0}")]
    Invalid(ValidationErrors),

    /// The interaction targets a ticket that does not exist.
    #[error("Ticket #{id} not found")]
    UnknownTicket {
        /// The id that was submitted.
        id: TicketId,
    },
}
