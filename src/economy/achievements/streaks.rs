//! Exercise streak tracking
//!
//! Tracks the number of completed exercises and consecutive exercise days.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Info for the daily exercise streak
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub current: u64,
    pub best: u64,
    /// Last day with activity, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_day: Option<String>,
}

impl StreakInfo {
    fn last_date(&self) -> Option<NaiveDate> {
        let last_day = self.last_activity_day.as_ref()?;
        NaiveDate::parse_from_str(last_day, DAY_FORMAT).ok()
    }

    /// Check if the streak is still alive (activity today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let Some(last_date) = self.last_date() else {
            return false;
        };
        let days_since = (today - last_date).num_days();
        (0..=1).contains(&days_since)
    }

    /// Streak length as seen on `today`; a lapsed streak counts as zero
    pub fn current_on(&self, today: NaiveDate) -> u64 {
        if self.is_active(today) { self.current } else { 0 }
    }

    /// Register activity on `today` and return the streak length.
    ///
    /// Activity on the same day counts once; a gap of more than one day
    /// restarts the streak.
    pub fn record(&mut self, today: NaiveDate) -> u64 {
        let next = match self.last_date() {
            Some(last) if last == today => return self.current.max(1),
            Some(last) if (today - last).num_days() == 1 => self.current + 1,
            _ => 1,
        };

        self.current = next;
        self.best = self.best.max(next);
        self.last_activity_day = Some(day_string(today));
        next
    }
}

/// Persisted exercise history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    /// Exercises completed, all time
    pub total: u64,
    #[serde(default)]
    pub streak: StreakInfo,
}

impl ExerciseLog {
    /// Count one completed exercise on `today`
    pub fn record_completion(&mut self, today: NaiveDate) {
        self.total += 1;
        self.streak.record(today);
    }
}

/// Format a date as `YYYY-MM-DD`
pub fn day_string(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_consecutive_days_extend() {
        let mut streak = StreakInfo::default();
        assert_eq!(streak.record(day(1)), 1);
        assert_eq!(streak.record(day(2)), 2);
        assert_eq!(streak.record(day(3)), 3);
        assert_eq!(streak.best, 3);
        assert_eq!(streak.last_activity_day.as_deref(), Some("2026-03-03"));
    }

    #[test]
    fn test_same_day_counts_once() {
        let mut streak = StreakInfo::default();
        streak.record(day(1));
        assert_eq!(streak.record(day(1)), 1);
        assert_eq!(streak.current, 1);
    }

    #[test]
    fn test_gap_resets_but_keeps_best() {
        let mut streak = StreakInfo::default();
        streak.record(day(1));
        streak.record(day(2));
        assert_eq!(streak.record(day(5)), 1);
        assert_eq!(streak.best, 2);
    }

    #[test]
    fn test_activity_window() {
        let mut streak = StreakInfo::default();
        assert!(!streak.is_active(day(1)));
        streak.record(day(1));
        assert!(streak.is_active(day(1)));
        assert!(streak.is_active(day(2)));
        assert!(!streak.is_active(day(3)));
        assert_eq!(streak.current_on(day(3)), 0);
    }

    #[test]
    fn test_exercise_log_counts_every_completion() {
        let mut log = ExerciseLog::default();
        log.record_completion(day(10));
        log.record_completion(day(10));
        log.record_completion(day(11));
        assert_eq!(log.total, 3);
        assert_eq!(log.streak.current, 2);
    }
}
