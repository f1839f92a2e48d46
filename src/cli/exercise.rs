//! Exercise command

use back2life::Economy;

use super::print_unlocked;

/// Complete the next exercise of the rehab plan
pub fn exercise_command(economy: &Economy) {
    let rewards = economy.rewards();
    let exercise = rewards.choose_exercise();
    println!("Time to exercise: {} ({} a day)", exercise.name, exercise.times_label());

    let outcome = rewards.complete_exercise();
    println!(
        "Great job! +{} coins. Balance: {}",
        outcome.reward.amount, outcome.reward.balance
    );
    println!(
        "Exercises completed: {}, streak: {} day{}",
        outcome.total,
        outcome.streak_days,
        if outcome.streak_days == 1 { "" } else { "s" }
    );
    print_unlocked(&outcome.reward.unlocked);
}
