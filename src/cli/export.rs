//! Export command implementation

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use back2life::Economy;
use back2life::economy::ExportOutcome;
use back2life::economy::achievements::today;
use back2life::progress::{
    ExportFormat, ProgressLog, TimeView, export_file_name, to_csv, to_printable,
};

use super::print_unlocked;

/// Write the progress report and reward the first export per format
pub fn export_command(
    economy: &Economy,
    format: &str,
    view: &str,
    out: Option<&Path>,
) -> Result<()> {
    let Some(format) = ExportFormat::from_str(format) else {
        bail!("Unknown format: {} (csv, pdf)", format);
    };
    let Some(view) = TimeView::from_str(view) else {
        bail!("Unknown view: {} (weekly, monthly)", view);
    };

    let day = today();
    let log = ProgressLog::load(economy.store());
    let content = match format {
        ExportFormat::Csv => to_csv(&log, view),
        ExportFormat::Pdf => to_printable(&log, view, day),
    };

    let dir = out.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    let path = dir.join(export_file_name(format, view, day));
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    println!("Report saved to {}", path.display());
    if format == ExportFormat::Pdf {
        println!("Open it in a browser and print to PDF to share with your doctor.");
    }

    match economy.rewards().export_report(format) {
        ExportOutcome::Rewarded(reward) => {
            println!(
                "+{} coins for your first {} export! Balance: {}",
                reward.amount,
                format.as_str(),
                reward.balance
            );
            print_unlocked(&reward.unlocked);
        }
        ExportOutcome::AlreadyRewarded => {}
    }

    Ok(())
}
