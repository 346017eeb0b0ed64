//! Interactions appended to a ticket's history.

use crate::model::{InteractionId, TicketId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ticket::UnknownVariant;

/// Who can see an interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to the customer.
    #[default]
    Public,
    /// Visible to staff only; may carry a recipient list.
    Internal,
}

impl Visibility {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Internal => "Internal",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Visibility {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "internal" => Ok(Visibility::Internal),
            _ => Err(UnknownVariant {
                kind: "visibility",
                value: s.to_string(),
                expected: "public, internal".to_string(),
            }),
        }
    }
}

/// A file attached to an interaction. Held in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name as uploaded.
    pub name: String,
    /// Where the file can be fetched.
    pub url: String,
    /// MIME type.
    pub kind: String,
}

impl Attachment {
    /// Build an attachment for a local file name; the kind is guessed from the extension.
    pub fn from_file_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
            Some(ext) if ext == "png" => "image/png",
            Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
            Some(ext) if ext == "pdf" => "application/pdf",
            Some(ext) if ext == "txt" || ext == "log" => "text/plain",
            _ => "application/octet-stream",
        };
        Self {
            url: format!("/files/{name}"),
            name,
            kind: kind.to_string(),
        }
    }
}

/// A timestamped message in a ticket's history. Never edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// Unique across the dataset.
    pub id: InteractionId,
    /// Ticket whose history holds this interaction.
    pub ticket_id: TicketId,
    /// Staff member or requester who wrote it.
    pub author: String,
    /// `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    /// Public or internal.
    pub visibility: Visibility,
    /// Message body.
    pub message: String,
    /// Attached files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Staff notified of an internal interaction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
}

impl Interaction {
    /// True for staff-only interactions.
    pub fn is_internal(&self) -> bool {
        self.visibility == Visibility::Internal
    }

    /// Recipients, which only exist for internal interactions.
    pub fn visible_recipients(&self) -> &[String] {
        if self.is_internal() {
            &self.recipients
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction(visibility: Visibility) -> Interaction {
        Interaction {
            id: InteractionId::new(1),
            ticket_id: TicketId::new(10).unwrap(),
            author: "Igor Paulino".to_string(),
            timestamp: "2025-01-01 10:00".to_string(),
            visibility,
            message: "Checked the logs".to_string(),
            attachments: Vec::new(),
            recipients: vec!["Ana Beatriz".to_string()],
        }
    }

    #[test]
    fn public_interaction_hides_recipients() {
        assert!(interaction(Visibility::Public).visible_recipients().is_empty());
    }

    #[test]
    fn internal_interaction_shows_recipients() {
        let i = interaction(Visibility::Internal);
        assert_eq!(i.visible_recipients(), ["Ana Beatriz".to_string()]);
    }

    #[test]
    fn attachment_kind_guessed_from_extension() {
        assert_eq!(Attachment::from_file_name("error.PNG").kind, "image/png");
        assert_eq!(Attachment::from_file_name("report.pdf").kind, "application/pdf");
        assert_eq!(
            Attachment::from_file_name("dump").kind,
            "application/octet-stream"
        );
    }

    #[test]
    fn visibility_defaults_to_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!("INTERNAL".parse::<Visibility>(), Ok(Visibility::Internal));
    }
}
