//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use back2life::Config;

/// Write the default configuration file
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    Config::default().save_to_file(&config_path)?;
    info!("Created config file at {}", config_path.display());

    println!("Configuration written to {}", config_path.display());
    println!("Storage: {}", Config::default_database_path().display());
    println!("\nNext steps:");
    println!("  back2life register --name \"Your Name\" --email you@example.com");
    println!("  back2life rehab --injury \"Knee Injury\" --exercise \"Squats:3\"");
    println!("  back2life seed sunflower");

    Ok(())
}
