//! Form drafts for new tickets and new interactions.
//!
//! A draft is plain data until submitted; validation reports every failing
//! field at once.

use crate::model::directory::find_tool;
use crate::model::error::{FormError, ValidationErrors};
use crate::model::{Attachment, Category, InternalStatus, Severity, Visibility};

/// The "new ticket" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicketDraft {
    /// Required.
    pub title: String,
    /// Required.
    pub description: String,
    /// Tool slug from the catalogue.
    pub tool: Option<String>,
    /// Required.
    pub severity: Option<Severity>,
    /// Support when omitted.
    pub category: Option<Category>,
    /// Files to attach.
    pub attachments: Vec<Attachment>,
}

impl NewTicketDraft {
    /// Check required fields and the tool slug.
    ///
    /// # Errors
    ///
    /// `FormError::Invalid` listing every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }
        match self.tool.as_deref() {
            None | Some("") => errors.add("tool", "Select a tool"),
            Some(tool) if find_tool(tool).is_none() => {
                errors.add("tool", format!("Unknown tool '{tool}'"))
            }
            Some(_) => {}
        }
        if self.severity.is_none() {
            errors.add("severity", "Select a severity");
        }
        errors.into_result()
    }

    /// Append a file.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Remove the attachment at `index`; out-of-range indices are ignored.
    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }
}

/// The "new interaction" form shown on a ticket's detail screen.
///
/// Besides the message itself, the form can reassign the ticket's owner and
/// reclassify it; fields left `None` keep the ticket's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInteractionDraft {
    /// Required.
    pub message: String,
    /// Public unless set otherwise.
    pub visibility: Visibility,
    /// Only kept when the interaction is internal.
    pub recipients: Vec<String>,
    /// Files to attach.
    pub attachments: Vec<Attachment>,
    /// New owner.
    pub owner: Option<String>,
    /// New severity.
    pub severity: Option<Severity>,
    /// New category.
    pub category: Option<Category>,
    /// New tool slug.
    pub tool: Option<String>,
    /// New internal status.
    pub internal_status: Option<InternalStatus>,
    /// New delivery date.
    pub delivery_date: Option<String>,
}

impl NewInteractionDraft {
    /// A public interaction with `message` and nothing else changed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Check the message and, when given, the tool slug.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut errors = ValidationErrors::new();
        if self.message.trim().is_empty() {
            errors.add("message", "Message is required");
        }
        if let Some(tool) = self.tool.as_deref() {
            if find_tool(tool).is_none() {
                errors.add("tool", format!("Unknown tool '{tool}'"));
            }
        }
        errors.into_result()
    }

    /// Append a file.
    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    /// Remove the attachment at `index`; out-of-range indices are ignored.
    pub fn remove_attachment(&mut self, index: usize) {
        if index < self.attachments.len() {
            self.attachments.remove(index);
        }
    }

    /// Recipients that will actually be stored with the interaction.
    pub fn effective_recipients(&self) -> Vec<String> {
        match self.visibility {
            Visibility::Internal => self.recipients.clone(),
            Visibility::Public => Vec::new(),
        }
    }

    /// Back to the initial, empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
