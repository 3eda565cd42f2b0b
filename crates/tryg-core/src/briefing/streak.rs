//! Medication streaks, counted from the history of fully medicated days.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::locale::Locale;

/// Streak length that earns a celebration.
pub const STREAK_CELEBRATE_DAYS: u32 = 3;

/// Streak length that earns the trophy.
pub const STREAK_TROPHY_DAYS: u32 = 7;

/// Number of consecutive days with all medicine taken.
///
/// The run ends at `today` when today is in `history`, otherwise at the day
/// before, so an unfinished today does not break a running streak. Dates
/// after `today` and duplicates are ignored.
pub fn medication_streak<I>(history: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = history.into_iter().filter(|d| *d <= today).collect();

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        today.pred_opt()
    };

    let mut streak = 0;
    while let Some(day) = cursor.filter(|d| days.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Celebration line for a streak, or `None` below three days.
pub fn streak_message(streak_days: u32, locale: Locale) -> Option<String> {
    if streak_days >= STREAK_TROPHY_DAYS {
        Some(locale.streak_message(streak_days, true))
    } else if streak_days >= STREAK_CELEBRATE_DAYS {
        Some(locale.streak_message(streak_days, false))
    } else {
        None
    }
}
