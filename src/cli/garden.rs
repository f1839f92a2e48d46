//! Garden commands

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};

use back2life::Economy;
use back2life::economy::ToolOutcome;
use back2life::garden::{ANIMATION_TICK_MS, GardenState, GardenTool, STAGE_PROGRESS_MAX, Seed};

use super::print_unlocked;

const BAR_WIDTH: u32 = 20;

fn progress_bar(progress: u32) -> String {
    let filled = (progress.min(STAGE_PROGRESS_MAX) * BAR_WIDTH / STAGE_PROGRESS_MAX) as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled),
        progress
    )
}

/// Show the plant and the tools on offer
pub fn garden_command(economy: &Economy) {
    let garden = GardenState::load(economy.store());
    let seed = Seed::load(economy.store());
    let stage = garden.current_stage();

    match seed {
        Some(seed) => println!("Your {} - level {}", seed.name(), garden.level()),
        None => println!("Your plant - level {}", garden.level()),
    }
    println!("  {}", progress_bar(garden.progress));
    println!("  Height: {:.0}", garden.height());
    println!("  \"{}\"", stage.message);
    println!("\nCoins: {}", economy.wallet().read());
    println!("Tools ({} coins each):", economy.settings().tool_cost);
    for tool in GardenTool::all() {
        println!("  {:<12} +{}% growth", tool.as_str(), tool.growth());
    }
}

/// Spend coins on a tool and animate the growth
pub fn use_tool_command(economy: &Economy, name: &str) -> Result<()> {
    let Some(tool) = GardenTool::from_str(name) else {
        bail!("Unknown tool: {} (water, sun, soil, fertilizer)", name);
    };

    match economy.rewards().use_tool(tool) {
        ToolOutcome::Applied {
            balance,
            growth,
            message,
            unlocked,
            ..
        } => {
            let mut stdout = std::io::stdout();
            for frame in growth.frames() {
                print!("\r  {}", progress_bar(frame.progress));
                stdout.flush()?;
                thread::sleep(Duration::from_millis(ANIMATION_TICK_MS));
            }
            println!();

            println!("{}: \"{}\"", tool.label(), message);
            if growth.advanced {
                println!(
                    "Your plant reached level {}! \"{}\"",
                    growth.after.level(),
                    growth.after.current_stage().message
                );
            }
            println!("Balance: {}", balance);
            print_unlocked(&unlocked);
        }
        ToolOutcome::InsufficientFunds { message, .. } => println!("{}", message),
    }

    Ok(())
}
