//! Point-in-time view of one care circle.
//!
//! A snapshot bundles what the live data subscriptions deliver: help
//! posts, member statuses, today's tasks and the symptom log. Each engine
//! call takes a snapshot and recomputes from scratch.

use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::briefing::{medication_streak, BriefingInput, MedicationClassifier, SymptomLogEntry, Task};
use crate::error::Result;
use crate::help_exchange::{HelpOffer, HelpRequest, MatchInput};
use crate::presence::MemberStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senior_name: Option<String>,

    /// Status of the member viewing the snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_status: Option<String>,

    #[serde(default)]
    pub offers: Vec<HelpOffer>,

    #[serde(default)]
    pub requests: Vec<HelpRequest>,

    #[serde(default)]
    pub member_statuses: Vec<MemberStatus>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub symptoms: Vec<SymptomLogEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check_in: Option<DateTime<Utc>>,

    /// Past dates on which all medicine was taken
    #[serde(default)]
    pub medication_history: Vec<NaiveDate>,
}

impl CircleSnapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn match_input(&self) -> MatchInput<'_> {
        MatchInput {
            offers: &self.offers,
            requests: &self.requests,
            my_status: self.my_status.as_deref(),
            member_statuses: &self.member_statuses,
        }
    }

    pub fn briefing_input(&self) -> BriefingInput<'_> {
        BriefingInput {
            tasks: &self.tasks,
            symptoms: &self.symptoms,
            senior_name: self.senior_name.as_deref(),
            last_check_in: self.last_check_in.as_ref(),
        }
    }

    /// Current medication streak as of `now`.
    ///
    /// Today counts when every medicine task in the snapshot is done, even
    /// if the history has not recorded it yet.
    pub fn medication_streak<Tz: TimeZone>(
        &self,
        classifier: &MedicationClassifier,
        now: &DateTime<Tz>,
    ) -> u32 {
        let today = now.date_naive();
        let today_done = crate::briefing::medicine_progress(&self.tasks, classifier).all_complete();
        let history = self
            .medication_history
            .iter()
            .copied()
            .chain(today_done.then_some(today));
        medication_streak(history, today)
    }
}
