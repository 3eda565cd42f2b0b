//! Daily briefing generator.
//!
//! Turns today's tasks and symptom log into one reassuring sentence for
//! relatives. Classification and wording are separate steps: [`classify`]
//! picks exactly one [`BriefingCase`] and the case renders itself in the
//! configured [`Locale`].

use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::locale::Locale;
use super::symptom::SymptomLogEntry;
use super::task::{MedicationClassifier, Task, DEFAULT_MEDICATION_KEYWORDS};
use crate::time::{is_today, local_time};

/// Name used when the circle has not named its senior.
pub const DEFAULT_SENIOR_NAME: &str = "Mor";

/// Severity of a briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BriefingKind {
    Success,
    Warning,
    Info,
}

/// One generated status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Briefing {
    pub message: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub kind: BriefingKind,
}

/// The branch of the priority chain that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum BriefingCase {
    /// All medicine and all tasks done, no symptoms today
    CalmDay,
    /// All medicine done, no symptoms, other tasks still open
    MedicineTaken,
    /// All medicine done but a symptom was logged today
    SymptomNoted {
        symptom: Option<String>,
        time: Option<NaiveTime>,
    },
    /// Symptoms today and medicine not complete
    SymptomsLogged { completed: usize, total: usize },
    /// No symptoms, some medicine still to take
    MedicineRemaining { remaining: usize },
    /// No medicine tasks, but the senior checked in today
    CheckedIn,
    NoActivity,
}

impl BriefingCase {
    pub fn emoji(&self) -> &'static str {
        match self {
            BriefingCase::CalmDay => "✨",
            BriefingCase::MedicineTaken => "💚",
            BriefingCase::SymptomNoted { .. } => "📋",
            BriefingCase::SymptomsLogged { .. } => "⚠️",
            BriefingCase::MedicineRemaining { .. } => "💊",
            BriefingCase::CheckedIn => "👍",
            BriefingCase::NoActivity => "💤",
        }
    }

    pub fn kind(&self) -> BriefingKind {
        match self {
            BriefingCase::CalmDay | BriefingCase::MedicineTaken | BriefingCase::CheckedIn => {
                BriefingKind::Success
            }
            BriefingCase::SymptomsLogged { .. } => BriefingKind::Warning,
            BriefingCase::SymptomNoted { .. }
            | BriefingCase::MedicineRemaining { .. }
            | BriefingCase::NoActivity => BriefingKind::Info,
        }
    }

    pub fn render(&self, first_name: &str, locale: Locale) -> Briefing {
        Briefing {
            message: locale.briefing_message(self, first_name),
            emoji: self.emoji().to_string(),
            kind: self.kind(),
        }
    }
}

/// Briefing settings, stored in the `[briefing]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Full name of the senior; only the first name is shown
    #[serde(default = "default_senior_name")]
    pub senior_name: String,
    /// Extra title markers for medication tasks
    #[serde(default = "default_medication_keywords")]
    pub medication_keywords: Vec<String>,
}

fn default_senior_name() -> String {
    DEFAULT_SENIOR_NAME.into()
}

fn default_medication_keywords() -> Vec<String> {
    DEFAULT_MEDICATION_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            senior_name: default_senior_name(),
            medication_keywords: default_medication_keywords(),
        }
    }
}

/// Everything the briefing looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct BriefingInput<'a> {
    pub tasks: &'a [Task],
    pub symptoms: &'a [SymptomLogEntry],
    /// Overrides the configured senior name when set
    pub senior_name: Option<&'a str>,
    pub last_check_in: Option<&'a DateTime<Utc>>,
}

/// Counts derived from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MedicineProgress {
    pub total: usize,
    pub completed: usize,
}

impl MedicineProgress {
    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

/// Text before the first space.
pub fn first_name(full_name: &str) -> &str {
    full_name.split(' ').next().unwrap_or(full_name)
}

/// Pick the briefing case for `input` as seen at `now`.
///
/// The chain is evaluated top to bottom and the first matching branch wins,
/// so exactly one case is returned for any input.
pub fn classify<Tz: TimeZone>(
    input: &BriefingInput<'_>,
    classifier: &MedicationClassifier,
    now: &DateTime<Tz>,
) -> BriefingCase {
    let medicine = medicine_progress(input.tasks, classifier);
    let all_medicine = medicine.all_complete();
    let all_tasks = !input.tasks.is_empty() && input.tasks.iter().all(|t| t.completed);

    let today_symptoms: Vec<&SymptomLogEntry> = input
        .symptoms
        .iter()
        .filter(|s| is_today(s.logged_at.as_ref(), now))
        .collect();
    let has_symptoms = !today_symptoms.is_empty();

    match (all_medicine, has_symptoms) {
        (true, false) if all_tasks => BriefingCase::CalmDay,
        (true, false) => BriefingCase::MedicineTaken,
        (true, true) => {
            let first = today_symptoms[0];
            BriefingCase::SymptomNoted {
                symptom: first.kind.clone().filter(|k| !k.is_empty()),
                time: first.logged_at.as_ref().map(|ts| local_time(ts, &now.timezone())),
            }
        }
        (false, true) => BriefingCase::SymptomsLogged {
            completed: medicine.completed,
            total: medicine.total,
        },
        (false, false) if medicine.total > 0 => BriefingCase::MedicineRemaining {
            remaining: medicine.remaining(),
        },
        (false, false) if is_today(input.last_check_in, now) => BriefingCase::CheckedIn,
        (false, false) => BriefingCase::NoActivity,
    }
}

/// Medicine task counts for `tasks`.
pub fn medicine_progress(tasks: &[Task], classifier: &MedicationClassifier) -> MedicineProgress {
    tasks
        .iter()
        .filter(|t| classifier.is_medication(t))
        .fold(MedicineProgress::default(), |mut acc, t| {
            acc.total += 1;
            if t.completed {
                acc.completed += 1;
            }
            acc
        })
}

/// Generates briefings with a fixed configuration.
#[derive(Debug, Clone)]
pub struct BriefingGenerator {
    locale: Locale,
    senior_name: String,
    classifier: MedicationClassifier,
}

impl Default for BriefingGenerator {
    fn default() -> Self {
        Self::with_config(&BriefingConfig::default())
    }
}

impl BriefingGenerator {
    /// Create a new generator with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom config.
    ///
    /// Configured keywords extend the built-in markers rather than replace
    /// them.
    pub fn with_config(config: &BriefingConfig) -> Self {
        let keywords = DEFAULT_MEDICATION_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(config.medication_keywords.iter().cloned());
        Self {
            locale: config.locale,
            senior_name: config.senior_name.clone(),
            classifier: MedicationClassifier::new(keywords),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn classifier(&self) -> &MedicationClassifier {
        &self.classifier
    }

    /// Classify `input` as seen at `now`.
    pub fn classify_at<Tz: TimeZone>(&self, input: &BriefingInput<'_>, now: &DateTime<Tz>) -> BriefingCase {
        classify(input, &self.classifier, now)
    }

    /// Generate the briefing for `input` as seen at `now`.
    pub fn generate_at<Tz: TimeZone>(&self, input: &BriefingInput<'_>, now: &DateTime<Tz>) -> Briefing {
        let case = self.classify_at(input, now);
        tracing::debug!(?case, "briefing case selected");
        let name = input.senior_name.unwrap_or(&self.senior_name);
        case.render(first_name(name), self.locale)
    }

    /// Generate the briefing for `input` as of the local wall clock.
    pub fn generate(&self, input: &BriefingInput<'_>) -> Briefing {
        self.generate_at(input, &Local::now())
    }
}

/// Generate a briefing with default settings, as of the local wall clock.
pub fn generate_briefing(input: &BriefingInput<'_>) -> Briefing {
    BriefingGenerator::new().generate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 19, 16, 0, 0)
            .unwrap()
    }

    fn today_at(hour: u32, min: u32) -> DateTime<Utc> {
        now()
            .timezone()
            .with_ymd_and_hms(2026, 10, 19, hour, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn medicine(id: &str) -> Task {
        Task::new(id, "Medicin").with_kind("medication")
    }

    fn generate(input: &BriefingInput<'_>) -> Briefing {
        BriefingGenerator::new().generate_at(input, &now())
    }

    #[test]
    fn first_name_is_text_before_space() {
        assert_eq!(first_name("Anna Hansen"), "Anna");
        assert_eq!(first_name("Mor"), "Mor");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn calm_day_when_everything_done() {
        let tasks = vec![medicine("m1").done(), Task::new("t1", "Gåtur").done()];
        let input = BriefingInput {
            tasks: &tasks,
            senior_name: Some("Anna Hansen"),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Success);
        assert_eq!(briefing.emoji, "✨");
        assert_eq!(briefing.message, "Alt ser fint ud. Anna har haft en rolig dag.");
    }

    #[test]
    fn medicine_taken_with_open_tasks() {
        let tasks = vec![medicine("m1").done(), Task::new("t1", "Gåtur")];
        let input = BriefingInput {
            tasks: &tasks,
            senior_name: Some("Anna Hansen"),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Success);
        assert_eq!(briefing.message, "Anna har taget al medicin. Alt er godt.");
    }

    #[test]
    fn symptom_with_medicine_taken_names_symptom_and_time() {
        let tasks = vec![medicine("m1").done()];
        let symptoms = vec![
            SymptomLogEntry::new("hovedpine", today_at(9, 30)),
            SymptomLogEntry::new("svimmelhed", today_at(11, 0)),
        ];
        let input = BriefingInput {
            tasks: &tasks,
            symptoms: &symptoms,
            senior_name: Some("Anna Hansen"),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Info);
        assert_eq!(
            briefing.message,
            "Anna har noteret hovedpine kl. 09.30, men har taget sin medicin."
        );
    }

    #[test]
    fn old_symptoms_are_ignored() {
        let tasks = vec![medicine("m1").done()];
        let symptoms = vec![SymptomLogEntry::new("hovedpine", today_at(9, 0) - Duration::days(1))];
        let input = BriefingInput {
            tasks: &tasks,
            symptoms: &symptoms,
            ..Default::default()
        };
        assert_eq!(
            BriefingGenerator::new().classify_at(&input, &now()),
            BriefingCase::CalmDay
        );
    }

    #[test]
    fn symptom_without_timestamp_is_not_today() {
        let tasks = vec![medicine("m1").done()];
        let symptoms: Vec<SymptomLogEntry> = serde_json::from_str(r#"[{"type":"hoste"}]"#).unwrap();
        let input = BriefingInput {
            tasks: &tasks,
            symptoms: &symptoms,
            ..Default::default()
        };
        assert_eq!(
            BriefingGenerator::new().classify_at(&input, &now()),
            BriefingCase::CalmDay
        );
    }

    #[test]
    fn symptoms_with_incomplete_medicine_warn() {
        let tasks = vec![medicine("m1").done(), medicine("m2")];
        let symptoms = vec![SymptomLogEntry::new("hoste", today_at(8, 0))];
        let input = BriefingInput {
            tasks: &tasks,
            symptoms: &symptoms,
            senior_name: Some("Anna"),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Warning);
        assert_eq!(briefing.emoji, "⚠️");
        assert_eq!(briefing.message, "Anna har logget symptomer. Medicin: 1/2 taget.");
    }

    #[test]
    fn symptoms_without_medicine_tasks_warn_with_zero_counts() {
        let symptoms = vec![SymptomLogEntry::new("hoste", today_at(8, 0))];
        let input = BriefingInput {
            symptoms: &symptoms,
            ..Default::default()
        };
        assert_eq!(
            BriefingGenerator::new().classify_at(&input, &now()),
            BriefingCase::SymptomsLogged { completed: 0, total: 0 }
        );
    }

    #[test]
    fn remaining_medicine_is_counted() {
        let tasks = vec![medicine("m1").done(), medicine("m2")];
        let input = BriefingInput {
            tasks: &tasks,
            senior_name: Some("Anna Hansen"),
            ..Default::default()
        };
        let briefing = BriefingGenerator::new()
            .with_locale(Locale::En)
            .generate_at(&input, &now());
        assert_eq!(briefing.kind, BriefingKind::Info);
        assert_eq!(briefing.message, "Anna has 1 medicine remaining today.");
    }

    #[test]
    fn check_in_today_without_medicine_tasks() {
        let tasks = vec![Task::new("t1", "Gåtur")];
        let check_in = today_at(7, 45);
        let input = BriefingInput {
            tasks: &tasks,
            last_check_in: Some(&check_in),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Success);
        assert_eq!(briefing.message, "Mor har tjekket ind i dag. Alt ser fint ud.");
    }

    #[test]
    fn stale_check_in_means_no_activity() {
        let check_in = today_at(7, 45) - Duration::days(2);
        let input = BriefingInput {
            last_check_in: Some(&check_in),
            ..Default::default()
        };
        let briefing = generate(&input);
        assert_eq!(briefing.kind, BriefingKind::Info);
        assert_eq!(briefing.emoji, "💤");
        assert_eq!(briefing.message, "Ingen aktivitet fra Mor endnu i dag.");
    }

    #[test]
    fn configured_keywords_extend_defaults() {
        let config = BriefingConfig {
            medication_keywords: vec!["insulin".into()],
            ..Default::default()
        };
        let generator = BriefingGenerator::with_config(&config);
        assert!(generator.classifier().is_medication(&Task::new("t1", "Insulin")));
        assert!(generator.classifier().is_medication(&Task::new("t2", "Pille")));
    }
}
