use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::presence::Role;

/// An offer or request posted to the help exchange.
///
/// Only `id` is required. The id names the kind of help (`cook`, `shop`)
/// and is unique within the active offer set and within the active request
/// set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpEntry {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// User id of the member who posted it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_role: Option<Role>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

pub type HelpOffer = HelpEntry;
pub type HelpRequest = HelpEntry;

impl HelpEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            emoji: None,
            created_by: None,
            created_by_name: None,
            created_by_role: None,
            created_at: None,
        }
    }

    pub fn by(mut self, role: Role) -> Self {
        self.created_by_role = Some(role);
        self
    }

    /// True when the creator roles differ.
    ///
    /// A missing role is a value of its own: an entry with a role and one
    /// without differ, two entries without a role do not.
    pub fn is_other_role_than(&self, other: &HelpEntry) -> bool {
        self.created_by_role != other.created_by_role
    }
}
