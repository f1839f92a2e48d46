//! Onboarding and settings commands

use anyhow::{Result, bail};

use back2life::Economy;
use back2life::garden::{SEEDS, Seed};
use back2life::profile::{
    AppSettings, INJURY_TYPES, PlannedExercise, REHAB_PLANS, RehabPlan, SettingKey, UserProfile,
    find_rehab_plan, search_rehab_plans,
};

/// Most times per day an exercise can be scheduled
const MAX_TIMES_PER_DAY: u32 = 5;

/// Save the user's registration details
pub fn register_command(
    economy: &Economy,
    name: String,
    email: String,
    age: String,
) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Name must not be empty");
    }
    if !email.contains('@') {
        bail!("Invalid email address: {}", email);
    }

    let profile = UserProfile {
        full_name: name.trim().to_string(),
        email: email.trim().to_string(),
        age: age.trim().to_string(),
    };
    profile.save(economy.store());
    println!("Welcome, {}!", profile.full_name);
    Ok(())
}

/// Parse `NAME:TIMES`; a bare name means once a day.
///
/// Names matching a catalog plan type take its spelling; other names are
/// kept as typed.
fn parse_exercise(entry: &str) -> Result<PlannedExercise> {
    let (name, frequency) = match entry.rsplit_once(':') {
        Some((name, frequency)) => (name.trim(), frequency.trim()),
        None => (entry.trim(), "1"),
    };
    if name.is_empty() {
        bail!("Exercise name must not be empty: '{}'", entry);
    }
    if !frequency
        .parse::<u32>()
        .is_ok_and(|n| (1..=MAX_TIMES_PER_DAY).contains(&n))
    {
        bail!(
            "Invalid times per day for '{}': {} (1-{})",
            name,
            frequency,
            MAX_TIMES_PER_DAY
        );
    }
    let name = find_rehab_plan(name).unwrap_or(name);
    Ok(PlannedExercise::new(name, frequency))
}

fn print_plan_types(plans: &[&str]) {
    for plan in plans {
        println!("  {}", plan);
    }
}

/// Set the injury and plan, search plan types, or show the stored plan
pub fn rehab_command(
    economy: &Economy,
    injury: Option<String>,
    exercises: &[String],
    search: Option<&str>,
) -> Result<()> {
    let store = economy.store();

    if let Some(term) = search {
        let plans = search_rehab_plans(term);
        if plans.is_empty() {
            println!("No plan types match '{}'.", term);
        } else {
            print_plan_types(&plans);
        }
        return Ok(());
    }

    if injury.is_none() && exercises.is_empty() {
        match RehabPlan::load(store) {
            Some(plan) => {
                println!("Injury: {}", plan.injury_type);
                for exercise in &plan.rehab_plan {
                    println!("  {} - {} a day", exercise.name, exercise.times_label());
                }
            }
            None => {
                println!("No rehab plan yet. Injury types:");
                for injury in INJURY_TYPES {
                    println!("  {}", injury);
                }
                println!("Plan types:");
                print_plan_types(REHAB_PLANS);
            }
        }
        return Ok(());
    }

    let mut plan = RehabPlan::load(store).unwrap_or_default();
    if let Some(injury) = injury {
        plan.injury_type = injury;
    }
    if !exercises.is_empty() {
        plan.rehab_plan = exercises
            .iter()
            .map(|entry| parse_exercise(entry))
            .collect::<Result<_>>()?;
    }
    plan.save(store);

    println!(
        "Rehab plan saved: {} with {} exercise(s)",
        plan.injury_type,
        plan.rehab_plan.len()
    );
    Ok(())
}

/// Choose the seed, or show the current choice
pub fn seed_command(economy: &Economy, seed: Option<&str>) -> Result<()> {
    let store = economy.store();

    let Some(name) = seed else {
        let current = Seed::load(store);
        for seed in SEEDS {
            let mark = if current == Some(*seed) { "*" } else { " " };
            println!("{} {:<10} {}", mark, seed.as_str(), seed.description());
        }
        return Ok(());
    };

    let Some(seed) = Seed::from_str(name) else {
        bail!("Unknown seed: {} (sunflower, rose, cactus)", name);
    };
    seed.save(store);
    println!("You chose the {}. {}", seed.name(), seed.description());
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Show all settings
pub fn settings_command(economy: &Economy) {
    let settings = AppSettings::load(economy.store());
    for key in SettingKey::all() {
        println!("  {:<15} {}", key.label(), on_off(settings.get(*key)));
    }
}

/// Flip one setting
pub fn toggle_setting_command(economy: &Economy, key: &str) -> Result<()> {
    let Some(key) = SettingKey::from_str(key) else {
        bail!("Unknown setting: {} (notifications, sound, dark)", key);
    };

    let mut settings = AppSettings::load(economy.store());
    let value = settings.toggle(key, economy.store());
    println!("{} {}", key.label(), on_off(value));
    Ok(())
}
