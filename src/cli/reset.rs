//! Reset command implementation

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use back2life::Economy;

/// Erase all stored data after confirmation
pub fn reset_command(economy: &Economy, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "This erases your coins, achievements, garden and profile. Type 'yes' to continue: "
        );
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        if answer.trim() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    economy.reset_all().context("Failed to clear storage")?;
    println!("All data erased.");
    Ok(())
}
