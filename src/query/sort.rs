//! Ordering tickets by a chosen field.

use crate::model::{Ticket, UnknownVariant};
use crate::query::collation::collate;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ===== SortKey =====

/// Ticket field a collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Numeric ticket id.
    Id,
    /// Title, collated.
    Title,
    /// Owner name, collated. Unassigned tickets have an empty owner.
    Owner,
    /// Customer name, collated.
    Customer,
    /// Creation timestamp.
    CreatedAt,
    /// Number of interactions, compared numerically.
    InteractionCount,
    /// Timestamp of the latest interaction.
    LastInteractionAt,
    /// Category label.
    Category,
    /// Severity label.
    Severity,
    /// Status wire name.
    Status,
    /// Tool slug; absent on some tickets.
    Tool,
    /// Internal status label; absent on some tickets.
    InternalStatus,
    /// Delivery date; absent on some tickets.
    DeliveryDate,
}

impl SortKey {
    /// Every key, in column order.
    pub const ALL: [SortKey; 13] = [
        SortKey::Id,
        SortKey::Title,
        SortKey::Owner,
        SortKey::Customer,
        SortKey::CreatedAt,
        SortKey::InteractionCount,
        SortKey::LastInteractionAt,
        SortKey::Category,
        SortKey::Severity,
        SortKey::Status,
        SortKey::Tool,
        SortKey::InternalStatus,
        SortKey::DeliveryDate,
    ];

    /// Command-line name of the key.
    pub fn name(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Owner => "owner",
            SortKey::Customer => "customer",
            SortKey::CreatedAt => "created-at",
            SortKey::InteractionCount => "interactions",
            SortKey::LastInteractionAt => "last-interaction",
            SortKey::Category => "category",
            SortKey::Severity => "severity",
            SortKey::Status => "status",
            SortKey::Tool => "tool",
            SortKey::InternalStatus => "internal-status",
            SortKey::DeliveryDate => "delivery-date",
        }
    }

    /// The value of this field on `ticket`, or `None` when the field is absent.
    fn value(self, ticket: &Ticket) -> Option<SortValue<'_>> {
        let text = |s: &'static str| Some(SortValue::Text(Cow::Borrowed(s)));
        match self {
            SortKey::Id => Some(SortValue::Number(ticket.id.get())),
            SortKey::InteractionCount => Some(SortValue::Number(u64::from(ticket.interaction_count))),
            SortKey::Title => Some(SortValue::Text(Cow::Borrowed(&ticket.title))),
            SortKey::Owner => Some(SortValue::Text(Cow::Borrowed(&ticket.owner))),
            SortKey::Customer => Some(SortValue::Text(Cow::Borrowed(&ticket.customer))),
            SortKey::CreatedAt => Some(SortValue::Text(Cow::Borrowed(&ticket.created_at))),
            SortKey::LastInteractionAt => {
                Some(SortValue::Text(Cow::Borrowed(&ticket.last_interaction_at)))
            }
            SortKey::Category => text(ticket.category.label()),
            SortKey::Severity => text(ticket.severity.label()),
            SortKey::Status => text(ticket.status.as_str()),
            SortKey::Tool => ticket.tool.as_deref().map(|t| SortValue::Text(Cow::Borrowed(t))),
            SortKey::InternalStatus => ticket.internal_status.and_then(|s| text(s.label())),
            SortKey::DeliveryDate => ticket
                .delivery_date
                .as_deref()
                .map(|d| SortValue::Text(Cow::Borrowed(d))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let alias = match normalized.as_str() {
            "interactioncount" => "interactions",
            "lastinteractionat" => "lastinteraction",
            other => other,
        };
        SortKey::ALL
            .into_iter()
            .find(|k| k.name().replace('-', "") == alias)
            .ok_or_else(|| UnknownVariant {
                kind: "sort key",
                value: s.to_string(),
                expected: SortKey::ALL.map(SortKey::name).join(", "),
            })
    }
}

// ===== SortDirection / SortSpec =====

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// A sort key together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    /// Field to order by.
    pub key: SortKey,
    /// Ascending or descending.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort by `key`, smallest first.
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `key`, largest first.
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

// ===== Comparison =====

#[derive(Debug)]
enum SortValue<'a> {
    Number(u64),
    Text(Cow<'a, str>),
}

impl SortValue<'_> {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            SortValue::Number(n) => Cow::Owned(n.to_string()),
            SortValue::Text(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(y),
        _ => collate(&a.as_text(), &b.as_text()),
    }
}

/// Compare two tickets under `spec`.
///
/// Absent values sort after present ones regardless of direction, and tie with
/// each other.
pub fn compare(a: &Ticket, b: &Ticket, spec: SortSpec) -> Ordering {
    match (spec.key.value(a), spec.key.value(b)) {
        (Some(x), Some(y)) => spec.direction.apply(compare_values(&x, &y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// A new collection ordered by `spec`. The input is left untouched.
///
/// The sort is stable: records comparing equal keep their input order.
pub fn sort<T: AsRef<Ticket> + Clone>(records: &[T], spec: SortSpec) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a.as_ref(), b.as_ref(), spec));
    sorted
}
