//! Achievement completion logic
//!
//! One pure function maps (catalog, signal) to an updated catalog. Nothing
//! else in the crate flips `completed`.

use super::definitions::{Achievement, AchievementCategory, AchievementId, FORTUNE_TARGET};

/// An observation that may move achievements forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSignal {
    /// An exercise was completed; totals as of after the completion
    ExerciseCompleted { total: u64, streak_days: u64 },
    /// Distinct care tools (water, sun) used today
    ToolsUsedToday { distinct: u64 },
    /// A progress report was exported in any format
    ReportExported,
    /// Distinct resources visited so far
    ResourcesVisited { distinct: u64 },
    /// Current plant level (stage + 1)
    PlantLevel(u64),
    /// Current coin balance
    BalanceObserved(u64),
}

/// Result of evaluating one signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub catalog: Vec<Achievement>,
    /// IDs that became completed, in catalog order
    pub newly_completed: Vec<String>,
    /// Whether any record changed (progress or completion)
    pub changed: bool,
}

enum Observation {
    Count(u64),
    Done,
}

fn observations(signal: &ProgressSignal) -> Vec<(AchievementId, Observation)> {
    match *signal {
        ProgressSignal::ExerciseCompleted { total, streak_days } => vec![
            (AchievementId::FirstExercise, Observation::Count(total)),
            (AchievementId::ExerciseStreak, Observation::Count(streak_days)),
        ],
        ProgressSignal::ToolsUsedToday { distinct } => {
            vec![(AchievementId::UseAllTools, Observation::Count(distinct))]
        }
        ProgressSignal::ReportExported => vec![(AchievementId::ExportData, Observation::Done)],
        ProgressSignal::ResourcesVisited { distinct } => {
            vec![(AchievementId::VisitResources, Observation::Count(distinct))]
        }
        ProgressSignal::PlantLevel(level) => {
            vec![(AchievementId::PlantGrowth, Observation::Count(level))]
        }
        ProgressSignal::BalanceObserved(balance) => vec![(
            AchievementId::Reach100Coins,
            Observation::Count(balance.min(FORTUNE_TARGET)),
        )],
    }
}

/// Apply one observation; returns true if the record changed.
fn advance(achievement: &mut Achievement, observation: Observation) -> bool {
    if achievement.completed {
        return false;
    }

    match observation {
        Observation::Done => {
            achievement.completed = true;
            if let Some(max) = achievement.max_progress {
                achievement.progress = Some(max);
            }
            true
        }
        Observation::Count(count) => match achievement.max_progress {
            Some(max) => {
                let progress = count.min(max);
                let changed = achievement.progress != Some(progress);
                achievement.progress = Some(progress);
                if progress >= max {
                    achievement.completed = true;
                    return true;
                }
                changed
            }
            None => {
                if count > 0 {
                    achievement.completed = true;
                    true
                } else {
                    false
                }
            }
        },
    }
}

/// Evaluate a signal against a catalog.
///
/// Completed records are frozen. Records with IDs outside the built-in
/// catalog are carried through untouched. "Recovery Champion" completes once
/// every daily achievement is complete, whatever the signal.
pub fn evaluate(catalog: &[Achievement], signal: &ProgressSignal) -> Evaluation {
    let mut catalog = catalog.to_vec();
    let mut newly_completed = Vec::new();
    let mut changed = false;

    for (id, observation) in observations(signal) {
        let Some(record) = catalog.iter_mut().find(|a| a.id == id.as_str()) else {
            continue;
        };
        if advance(record, observation) {
            changed = true;
            if record.completed {
                newly_completed.push(record.id.clone());
            }
        }
    }

    let mut daily = catalog
        .iter()
        .filter(|a| a.category == AchievementCategory::Daily)
        .peekable();
    let all_daily_done = daily.peek().is_some() && daily.all(|a| a.completed);

    if all_daily_done {
        if let Some(champion) = catalog
            .iter_mut()
            .find(|a| a.id == AchievementId::AllDaily.as_str())
        {
            if advance(champion, Observation::Done) {
                changed = true;
                newly_completed.push(champion.id.clone());
            }
        }
    }

    Evaluation {
        catalog,
        newly_completed,
        changed,
    }
}
