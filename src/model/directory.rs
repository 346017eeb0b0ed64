//! Staff roster, tool catalogue, teams and user accounts.
//!
//! All of this is fixed reference data; user accounts are derived from the
//! roster rather than stored.

use std::fmt;

/// A staff member who can own tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffMember {
    /// Stable slug, e.g. "giovana-lana".
    pub slug: &'static str,
    /// Full name, as stored in ticket owners.
    pub name: &'static str,
}

/// Staff roster, in display order.
pub const ROSTER: [StaffMember; 6] = [
    StaffMember { slug: "giovana-lana", name: "Giovana Lana" },
    StaffMember { slug: "jessica-rodrigues", name: "Jéssica Rodrigues" },
    StaffMember { slug: "igor-paulino", name: "Igor Paulino" },
    StaffMember { slug: "ana-beatriz", name: "Ana Beatriz" },
    StaffMember { slug: "guilherme-borges", name: "Guilherme Borges" },
    StaffMember { slug: "edielma-silva", name: "Edielma Silva" },
];

/// A product a ticket can be raised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Slug stored on tickets.
    pub value: &'static str,
    /// Display name.
    pub label: &'static str,
}

/// Tool catalogue.
pub const TOOLS: [Tool; 14] = [
    Tool { value: "pdv-link-plus", label: "PDV Link Plus" },
    Tool { value: "foco-pdv", label: "Foco PDV" },
    Tool { value: "herbamed", label: "Herbamed" },
    Tool { value: "geolab", label: "Geolab" },
    Tool { value: "teuto", label: "Teuto" },
    Tool { value: "mais-saude", label: "Mais Saúde" },
    Tool { value: "maxifarma", label: "Maxifarma" },
    Tool { value: "luchefarma", label: "Luchefarma" },
    Tool { value: "sogamax", label: "Sogamax" },
    Tool { value: "milfarma", label: "Milfarma" },
    Tool { value: "vitamedic", label: "Vitamedic" },
    Tool { value: "globo-pharma", label: "Globo Pharma" },
    Tool { value: "farmarcas", label: "Farmarcas" },
    Tool { value: "febrafar", label: "Febrafar" },
];

/// Look up a tool by its slug.
pub fn find_tool(value: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.value == value)
}

/// Display label for a stored tool slug, falling back to the raw value.
pub fn tool_label(value: &str) -> &str {
    find_tool(value).map_or(value, |t| t.label)
}

/// A support team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    /// Numeric id.
    pub id: u32,
    /// Team name.
    pub name: &'static str,
    /// What the team handles.
    pub description: &'static str,
    /// Roster names of the members.
    pub members: &'static [&'static str],
}

/// The support teams.
pub const TEAMS: [Team; 3] = [
    Team {
        id: 1,
        name: "Tier 1 Support",
        description: "First-level customer support",
        members: &["Giovana Lana", "Jéssica Rodrigues"],
    },
    Team {
        id: 2,
        name: "Development",
        description: "Development and bug fixes",
        members: &["Igor Paulino", "Guilherme Borges"],
    },
    Team {
        id: 3,
        name: "Integration",
        description: "Integrations and deployments",
        members: &["Ana Beatriz", "Edielma Silva"],
    },
];

/// Access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manages users and settings.
    Admin,
    /// Works tickets.
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("Admin"),
            Role::Agent => f.write_str("Agent"),
        }
    }
}

/// A user account derived from the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Position in the roster, starting at 1.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Whether the account can sign in.
    pub active: bool,
}

/// Derive user accounts from the roster.
///
/// The first roster member is the administrator. E-mail local parts are the
/// roster slug with dashes replaced by dots.
pub fn users(email_domain: &str) -> Vec<User> {
    ROSTER
        .iter()
        .enumerate()
        .map(|(i, member)| User {
            id: i as u32 + 1,
            name: member.name.to_string(),
            email: format!("{}@{}", member.slug.replace('-', "."), email_domain),
            role: if i == 0 { Role::Admin } else { Role::Agent },
            active: true,
        })
        .collect()
}

/// Users whose name or e-mail contains `query`, case-insensitively.
pub fn search_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
        .collect()
}
