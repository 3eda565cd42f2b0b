//! Static match rules.
//!
//! Rules are configuration: loaded once at startup (see
//! [`crate::storage::Config`]) and handed to the matcher by reference.
//! New pairs are added by appending entries, in the order they should be
//! checked.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::ValidationError;

/// What the UI shows when a match is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    pub emoji: String,
    pub title: String,
    pub message: String,
    /// Call-to-action button text
    pub cta: String,
    /// Action id the front end dispatches on, e.g. `plan-meal` or `call`
    pub action: String,
}

impl Celebration {
    fn new(emoji: &str, title: &str, message: &str, cta: &str, action: &str) -> Self {
        Self {
            emoji: emoji.into(),
            title: title.into(),
            message: message.into(),
            cta: cta.into(),
            action: action.into(),
        }
    }
}

/// An active offer with `offer_id` plus an active request with
/// `request_id` is a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPairRule {
    pub offer_id: String,
    pub request_id: String,
    pub celebration: Celebration,
}

/// Any member reporting `status_id` plus an active request with
/// `request_id` is a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMatchRule {
    pub status_id: String,
    pub request_id: String,
    pub celebration: Celebration,
}

/// The full, ordered rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    #[serde(default = "default_match_pairs")]
    pub match_pairs: Vec<MatchPairRule>,
    #[serde(default = "default_status_matches")]
    pub status_matches: Vec<StatusMatchRule>,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            match_pairs: default_match_pairs(),
            status_matches: default_status_matches(),
        }
    }
}

impl MatchRules {
    /// An empty rule set; nothing ever matches.
    pub fn empty() -> Self {
        Self {
            match_pairs: Vec::new(),
            status_matches: Vec::new(),
        }
    }

    /// Reject rules with blank ids.
    ///
    /// Ids that do not appear in the built-in catalogs are accepted but
    /// logged, since circles may post custom offers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, rule) in self.match_pairs.iter().enumerate() {
            non_blank(&rule.offer_id, || format!("match_pairs[{i}].offer_id"))?;
            non_blank(&rule.request_id, || format!("match_pairs[{i}].request_id"))?;
            if !catalog::is_known_help_id(&rule.offer_id) {
                tracing::warn!(offer_id = %rule.offer_id, "match pair references an offer outside the catalog");
            }
            if !catalog::is_known_help_id(&rule.request_id) {
                tracing::warn!(request_id = %rule.request_id, "match pair references a request outside the catalog");
            }
        }
        for (i, rule) in self.status_matches.iter().enumerate() {
            non_blank(&rule.status_id, || format!("status_matches[{i}].status_id"))?;
            non_blank(&rule.request_id, || format!("status_matches[{i}].request_id"))?;
            if !catalog::is_known_status(&rule.status_id) {
                tracing::warn!(status_id = %rule.status_id, "status match references an unknown status");
            }
        }
        Ok(())
    }
}

fn non_blank(value: &str, field: impl FnOnce() -> String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field: field() });
    }
    Ok(())
}

fn default_match_pairs() -> Vec<MatchPairRule> {
    let pair = |offer_id: &str, request_id: &str, celebration: Celebration| MatchPairRule {
        offer_id: offer_id.into(),
        request_id: request_id.into(),
        celebration,
    };
    vec![
        pair(
            "cook",
            "shop",
            Celebration::new("🍽️", "Perfekt match!", "I kan lave et måltid sammen", "Planlæg madlavning", "plan-meal"),
        ),
        pair(
            "visit",
            "company",
            Celebration::new("☕", "Match!", "Tid til en hyggelig visit", "Aftal besøg", "plan-visit"),
        ),
        pair(
            "drive",
            "transport",
            Celebration::new("🚗", "Transport-match!", "Koordinér turen sammen", "Planlæg kørsel", "plan-transport"),
        ),
        pair(
            "garden",
            "outdoor",
            Celebration::new("🌿", "Have-match!", "Tid i haven sammen", "Planlæg havearbejde", "plan-garden"),
        ),
        pair(
            "tech",
            "help-tech",
            Celebration::new("💻", "Tech-hjælp!", "Hjælp med teknologi", "Ring og hjælp", "call"),
        ),
    ]
}

fn default_status_matches() -> Vec<StatusMatchRule> {
    vec![
        StatusMatchRule {
            status_id: "available".into(),
            request_id: "talk".into(),
            celebration: Celebration::new(
                "📞",
                "Tid til en snak!",
                "Ring nu - der er tid til at snakke",
                "Ring nu",
                "call",
            ),
        },
        StatusMatchRule {
            status_id: "home".into(),
            request_id: "visit".into(),
            celebration: Celebration::new(
                "🏠",
                "Kom forbi!",
                "Der er nogen hjemme - perfekt til et besøg",
                "Aftal besøg",
                "plan-visit",
            ),
        },
    ]
}
