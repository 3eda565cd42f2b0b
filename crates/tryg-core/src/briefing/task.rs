//! Daily tasks and the medication predicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task type tag that always marks a medication task.
pub const MEDICATION_TYPE: &str = "medication";

/// Title markers that classify an untyped task as medication.
pub const DEFAULT_MEDICATION_KEYWORDS: &[&str] = &["medicin", "pille"];

/// One of the senior's daily tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Explicit category tag, e.g. `medication`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub completed: bool,

    /// Part of the day the task belongs to, e.g. `morgen`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    /// Planned time of day as entered, e.g. `08:00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            kind: None,
            completed: false,
            period: None,
            time: None,
            created_at: None,
            completed_at: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Decides which tasks are about taking medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationClassifier {
    /// Lowercased title markers
    keywords: Vec<String>,
}

impl Default for MedicationClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MEDICATION_KEYWORDS.iter().copied())
    }
}

impl MedicationClassifier {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// A task is medication if typed `medication` or if its title contains
    /// any marker, ignoring case. A task with neither is not.
    pub fn is_medication(&self, task: &Task) -> bool {
        if task.kind.as_deref() == Some(MEDICATION_TYPE) {
            return true;
        }
        task.title.as_deref().is_some_and(|title| {
            let title = title.to_lowercase();
            self.keywords.iter().any(|k| title.contains(k.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_match_ignores_case() {
        let classifier = MedicationClassifier::default();
        assert!(classifier.is_medication(&Task::new("t1", "Medicin kl 8")));
        assert!(classifier.is_medication(&Task::new("t2", "MEDICIN kl 8")));
        assert!(classifier.is_medication(&Task::new("t3", "Blodtryks-PILLE")));
        assert!(!classifier.is_medication(&Task::new("t4", "Gåtur")));
    }

    #[test]
    fn medication_type_wins_over_title() {
        let classifier = MedicationClassifier::default();
        let task = Task::new("t1", "Morgenrutine").with_kind("medication");
        assert!(classifier.is_medication(&task));
    }

    #[test]
    fn task_without_title_or_type_is_not_medication() {
        let task: Task = serde_json::from_str(r#"{"id":"t1","completed":true}"#).unwrap();
        assert!(!MedicationClassifier::default().is_medication(&task));
    }

    #[test]
    fn custom_keywords_are_normalized() {
        let classifier = MedicationClassifier::new([" Insulin ", ""]);
        assert!(classifier.is_medication(&Task::new("t1", "insulin før frokost")));
        assert!(!classifier.is_medication(&Task::new("t2", "Medicin")));
    }
}
