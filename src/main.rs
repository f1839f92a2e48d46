use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use back2life::Config;

mod cli;

#[derive(Parser)]
#[command(name = "back2life")]
#[command(about = "Back2Life - earn coins for your rehabilitation and grow your garden")]
#[command(version)]
struct Cli {
    /// Path to the storage database (defaults to ~/.back2life/storage.db)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.back2life/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default ~/.back2life/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the coin balance
    Coins,

    /// List achievements and their progress
    Achievements {
        /// Only show one category (daily, progress, special)
        #[arg(long)]
        category: Option<String>,
    },

    /// Claim the reward of a completed achievement
    Claim {
        /// Achievement ID (e.g. first-exercise)
        id: String,
    },

    /// Browse the resource directory
    Resources {
        /// Only show links matching this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Open a resource (first visit to each URL pays coins)
    Visit {
        url: String,
    },

    /// Complete the next exercise of your rehab plan
    Exercise,

    /// Show the garden, or use a care tool on the plant
    Garden {
        #[command(subcommand)]
        action: Option<GardenAction>,
    },

    /// Export the progress report
    Export {
        /// csv or pdf
        format: String,

        /// weekly or monthly
        #[arg(long, default_value = "weekly")]
        view: String,

        /// Output directory (defaults to current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Register or update your profile
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        age: String,
    },

    /// Set your injury and rehab plan, or show the current one
    Rehab {
        /// Injury type (e.g. "Knee Injury")
        #[arg(long)]
        injury: Option<String>,

        /// Exercise as NAME:TIMES_PER_DAY, repeatable
        #[arg(long = "exercise")]
        exercises: Vec<String>,

        /// List plan types matching this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Choose the seed to grow, or show the current choice
    Seed {
        /// sunflower, rose or cactus
        seed: Option<String>,
    },

    /// Show settings, or toggle one
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Erase all stored data
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum GardenAction {
    /// Spend coins on a tool (water, sun, soil, fertilizer)
    Use { tool: String },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Flip a setting (notifications, sound, dark)
    Toggle { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let config = Config::load(cli.config.as_deref())?;
    let economy = cli::open_economy(cli.data.as_deref(), &config);

    match cli.command {
        Some(Commands::Init { .. }) => {}
        Some(Commands::Coins) | None => cli::economy::coins_command(&economy),
        Some(Commands::Achievements { category }) => {
            cli::economy::achievements_command(&economy, category.as_deref())?;
        }
        Some(Commands::Claim { id }) => cli::economy::claim_command(&economy, &id),
        Some(Commands::Resources { search }) => {
            cli::resources::resources_command(&economy, search.as_deref());
        }
        Some(Commands::Visit { url }) => cli::resources::visit_command(&economy, &url),
        Some(Commands::Exercise) => cli::exercise::exercise_command(&economy),
        Some(Commands::Garden { action }) => match action {
            Some(GardenAction::Use { tool }) => cli::garden::use_tool_command(&economy, &tool)?,
            None => cli::garden::garden_command(&economy),
        },
        Some(Commands::Export { format, view, out }) => {
            cli::export::export_command(&economy, &format, &view, out.as_deref())?;
        }
        Some(Commands::Register { name, email, age }) => {
            cli::profile::register_command(&economy, name, email, age)?;
        }
        Some(Commands::Rehab {
            injury,
            exercises,
            search,
        }) => {
            cli::profile::rehab_command(&economy, injury, &exercises, search.as_deref())?;
        }
        Some(Commands::Seed { seed }) => cli::profile::seed_command(&economy, seed.as_deref())?,
        Some(Commands::Settings { action }) => match action {
            Some(SettingsAction::Toggle { key }) => {
                cli::profile::toggle_setting_command(&economy, &key)?;
            }
            None => cli::profile::settings_command(&economy),
        },
        Some(Commands::Reset { yes }) => cli::reset::reset_command(&economy, yes)?,
    }

    Ok(())
}
