use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped symptom observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomLogEntry {
    /// Symptom name as logged, e.g. `hovedpine`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Body region id for pain entries, see [`crate::catalog::BODY_REGIONS`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
}

impl SymptomLogEntry {
    pub fn new(kind: impl Into<String>, logged_at: DateTime<Utc>) -> Self {
        Self {
            kind: Some(kind.into()),
            body_location: None,
            logged_at: Some(logged_at),
        }
    }
}
