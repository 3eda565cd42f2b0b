//! Message templates per language.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::generator::BriefingCase;
use crate::error::ValidationError;
use crate::time::format_hm;

/// Language of generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Danish
    #[default]
    Da,
    /// English
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Da => "da",
            Locale::En => "en",
        }
    }

    /// Clock time the way the language writes it: `09.30` in Danish,
    /// `09:30` in English.
    pub fn format_time(self, time: NaiveTime) -> String {
        match self {
            Locale::Da => time.format("%H.%M").to_string(),
            Locale::En => format_hm(time),
        }
    }

    /// Sentence for one branch of the briefing chain.
    pub(crate) fn briefing_message(self, case: &BriefingCase, name: &str) -> String {
        match (self, case) {
            (Locale::Da, BriefingCase::CalmDay) => {
                format!("Alt ser fint ud. {name} har haft en rolig dag.")
            }
            (Locale::En, BriefingCase::CalmDay) => {
                format!("Everything looks good. {name} has had a calm day.")
            }

            (Locale::Da, BriefingCase::MedicineTaken) => {
                format!("{name} har taget al medicin. Alt er godt.")
            }
            (Locale::En, BriefingCase::MedicineTaken) => {
                format!("{name} has taken all medicine. All is well.")
            }

            (Locale::Da, BriefingCase::SymptomNoted { symptom, time }) => {
                let symptom = symptom.as_deref().unwrap_or("symptom");
                let at = time.map(|t| format!(" kl. {}", self.format_time(t))).unwrap_or_default();
                format!("{name} har noteret {symptom}{at}, men har taget sin medicin.")
            }
            (Locale::En, BriefingCase::SymptomNoted { symptom, time }) => {
                let symptom = symptom.as_deref().unwrap_or("a symptom");
                let at = time.map(|t| format!(" at {}", self.format_time(t))).unwrap_or_default();
                format!("{name} noted {symptom}{at}, but has taken their medicine.")
            }

            (Locale::Da, BriefingCase::SymptomsLogged { completed, total }) => {
                format!("{name} har logget symptomer. Medicin: {completed}/{total} taget.")
            }
            (Locale::En, BriefingCase::SymptomsLogged { completed, total }) => {
                format!("{name} has logged symptoms. Medicine: {completed}/{total} taken.")
            }

            (Locale::Da, BriefingCase::MedicineRemaining { remaining }) => {
                let plural = if *remaining > 1 { "er" } else { "" };
                format!("{name} mangler {remaining} medicin{plural} i dag.")
            }
            (Locale::En, BriefingCase::MedicineRemaining { remaining }) => {
                let plural = if *remaining > 1 { "s" } else { "" };
                format!("{name} has {remaining} medicine{plural} remaining today.")
            }

            (Locale::Da, BriefingCase::CheckedIn) => {
                format!("{name} har tjekket ind i dag. Alt ser fint ud.")
            }
            (Locale::En, BriefingCase::CheckedIn) => {
                format!("{name} has checked in today. Everything looks good.")
            }

            (Locale::Da, BriefingCase::NoActivity) => {
                format!("Ingen aktivitet fra {name} endnu i dag.")
            }
            (Locale::En, BriefingCase::NoActivity) => {
                format!("No activity from {name} yet today.")
            }
        }
    }

    pub(crate) fn streak_message(self, days: u32, all_medicine: bool) -> String {
        match (self, all_medicine) {
            (Locale::Da, true) => format!("🏆 {days}. dag i træk med alt medicin taget!"),
            (Locale::Da, false) => format!("🎉 {days}. dag i træk!"),
            (Locale::En, true) => format!("🏆 Day {days} in a row with all medicine taken!"),
            (Locale::En, false) => format!("🎉 Day {days} in a row!"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "da" | "da-dk" | "dansk" => Ok(Locale::Da),
            "en" | "en-gb" | "en-us" | "english" => Ok(Locale::En),
            other => Err(ValidationError::InvalidValue {
                field: "locale".into(),
                message: format!("unsupported locale '{other}', use da or en"),
            }),
        }
    }
}
