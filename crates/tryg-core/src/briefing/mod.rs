//! Daily briefing: a one-sentence summary of the senior's day.
//!
//! Relatives see a calm, human-readable status instead of raw task and
//! symptom data. The same inputs always give the same briefing.

mod generator;
mod locale;
mod streak;
mod symptom;
mod task;

pub use generator::{
    classify, first_name, generate_briefing, medicine_progress, Briefing, BriefingCase,
    BriefingConfig, BriefingGenerator, BriefingInput, BriefingKind, MedicineProgress,
    DEFAULT_SENIOR_NAME,
};
pub use locale::Locale;
pub use streak::{medication_streak, streak_message, STREAK_CELEBRATE_DAYS, STREAK_TROPHY_DAYS};
pub use symptom::SymptomLogEntry;
pub use task::{MedicationClassifier, Task, DEFAULT_MEDICATION_KEYWORDS, MEDICATION_TYPE};
