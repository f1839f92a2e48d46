//! Balance, achievements and claim commands

use anyhow::{Result, bail};

use back2life::economy::achievements::{Achievement, AchievementCategory, today};
use back2life::{ClaimOutcome, Economy};

/// Show the coin balance
pub fn coins_command(economy: &Economy) {
    println!("Coins: {}", economy.wallet().read());
}

fn print_achievement(achievement: &Achievement, claimed: bool) {
    let mark = if achievement.completed { "x" } else { " " };
    let state = match (achievement.completed, claimed) {
        (true, true) => "claimed".to_string(),
        (true, false) => "ready to claim".to_string(),
        (false, _) => match (achievement.progress_pair(), achievement.progress_percent()) {
            (Some((progress, max)), Some(percent)) => {
                format!("{}/{} ({}%)", progress, max, percent)
            }
            _ => "locked".to_string(),
        },
    };

    println!(
        "  [{}] {:<20} +{:<4} {}",
        mark, achievement.title, achievement.reward, state
    );
    println!("      {} ({})", achievement.description, achievement.id);
}

/// List achievements, grouped by category
pub fn achievements_command(economy: &Economy, category: Option<&str>) -> Result<()> {
    let filter = match category {
        Some(name) => match AchievementCategory::from_str(name) {
            Some(category) => Some(category),
            None => bail!("Unknown category: {} (daily, progress, special)", name),
        },
        None => None,
    };

    let tracker = economy.achievements();
    let catalog = tracker.load();
    let summary = tracker.summary();

    println!(
        "Achievements: {}/{} completed ({}%), {} coins earned",
        summary.completed, summary.total, summary.completion_percent, summary.coins_earned
    );
    println!(
        "Exercise streak: {} day(s)\n",
        economy.rewards().exercise_streak_on(today())
    );

    for category in AchievementCategory::all() {
        if filter.is_some_and(|f| f != *category) {
            continue;
        }
        println!("{}", category.label());
        for achievement in catalog.iter().filter(|a| a.category == *category) {
            print_achievement(achievement, tracker.is_claimed(&achievement.id));
        }
        println!();
    }

    Ok(())
}

/// Claim the reward of one achievement
pub fn claim_command(economy: &Economy, id: &str) {
    match economy.achievements().claim_by_id(id) {
        ClaimOutcome::Claimed { reward, balance } => {
            println!("Claimed {} coins! Balance: {}", reward, balance);
        }
        ClaimOutcome::NotCompleted => println!("'{}' is not completed yet.", id),
        ClaimOutcome::AlreadyClaimed => println!("'{}' was already claimed.", id),
        ClaimOutcome::Unknown => println!("No achievement with ID '{}'.", id),
    }
}
