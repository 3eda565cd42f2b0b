//! Family presence: member roles and self-reported availability.
//!
//! Each circle member has at most one current status, overwritten on
//! update. Status ids are free-form strings so that statuses written by
//! newer clients still load; [`STATUS_OPTIONS`] lists the known ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a care circle member.
///
/// Stored as a plain string. Role strings this version does not know
/// about are kept verbatim in [`Role::Other`], so two different unknown
/// roles still compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Senior,
    Relative,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Senior => "senior",
            Role::Relative => "relative",
            Role::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "senior" => Role::Senior,
            "relative" => Role::Relative,
            _ => Role::Other(role),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current status of one circle member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    /// Member (user) id; the status document is keyed by it
    pub member_id: String,

    /// Status id, e.g. `home` or `available`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MemberStatus {
    pub fn new(member_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            status: Some(status.into()),
            display_name: None,
            role: None,
            updated_at: None,
        }
    }

    /// True if this member currently reports `status_id`.
    pub fn is(&self, status_id: &str) -> bool {
        self.status.as_deref() == Some(status_id)
    }
}

/// A selectable presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name understood by the front end
    pub icon: &'static str,
}

/// Known presence statuses, in display order.
pub const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption { id: "work", label: "På arbejde", icon: "briefcase" },
    StatusOption { id: "home", label: "Hjemme", icon: "home" },
    StatusOption { id: "traveling", label: "Undervejs", icon: "car" },
    StatusOption { id: "available", label: "Har tid til en snak", icon: "coffee" },
    StatusOption { id: "busy", label: "Optaget", icon: "moon" },
];

/// Look up a known status option by id.
pub fn status_option(id: &str) -> Option<&'static StatusOption> {
    STATUS_OPTIONS.iter().find(|s| s.id == id)
}
