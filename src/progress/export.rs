//! Progress report export
//!
//! CSV for spreadsheets, and a printable HTML report the user can print to
//! PDF for their doctor.

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ProgressAverages, ProgressLog, TimeView};
use crate::economy::achievements::day_string;

/// Export format, rewarded once each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

const CSV_COLUMNS: [&str; 6] = [
    "Therapy Minutes",
    "Outside Hours",
    "Steps",
    "Anxiety",
    "Stress",
    "Consistency",
];

/// Quote a field that would otherwise split or break its row
fn escape_csv(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render one view as CSV, header first.
pub fn to_csv(log: &ProgressLog, view: TimeView) -> String {
    let mut csv = String::new();
    let _ = writeln!(csv, "{},{}", view.label_heading(), CSV_COLUMNS.join(","));

    for entry in log.entries(view) {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            escape_csv(&entry.label),
            entry.therapy_minutes,
            entry.outside_hours,
            entry.steps,
            entry.anxiety,
            entry.stress,
            entry.consistency
        );
    }
    csv
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one view as a printable HTML report.
pub fn to_printable(log: &ProgressLog, view: TimeView, generated: NaiveDate) -> String {
    let title = match view {
        TimeView::Weekly => "Weekly Therapy Progress Report",
        TimeView::Monthly => "Monthly Therapy Progress Report",
    };

    let mut html = String::new();
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html><head><meta charset=\"utf-8\"><title>{}</title>", title);
    let _ = writeln!(
        html,
        "<style>body{{font-family:sans-serif;margin:2em}}table{{border-collapse:collapse;width:100%}}th,td{{border:1px solid #ccc;padding:6px;text-align:center}}th{{background:#e8f5e9}}</style>"
    );
    let _ = writeln!(html, "</head><body>");
    let _ = writeln!(html, "<h1>{}</h1>", title);
    let _ = writeln!(html, "<p>Generated on {}</p>", day_string(generated));

    if let Some(avg) = log.averages(view) {
        let _ = writeln!(html, "<h2>Summary</h2><ul>");
        let _ = writeln!(
            html,
            "<li>Average therapy minutes: {}</li>",
            ProgressAverages::fmt_one(avg.therapy_minutes)
        );
        let _ = writeln!(
            html,
            "<li>Average hours outside: {}</li>",
            ProgressAverages::fmt_one(avg.outside_hours)
        );
        let _ = writeln!(html, "<li>Average steps: {}</li>", avg.steps);
        let _ = writeln!(
            html,
            "<li>Average anxiety: {}</li>",
            ProgressAverages::fmt_one(avg.anxiety)
        );
        let _ = writeln!(
            html,
            "<li>Average stress: {}</li>",
            ProgressAverages::fmt_one(avg.stress)
        );
        let _ = writeln!(
            html,
            "<li>Average consistency: {}</li>",
            ProgressAverages::fmt_one(avg.consistency)
        );
        let _ = writeln!(html, "</ul>");
    }

    let _ = writeln!(html, "<h2>Details</h2><table><tr><th>{}</th>", view.label_heading());
    for column in CSV_COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    let _ = writeln!(html, "</tr>");

    for entry in log.entries(view) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.label),
            entry.therapy_minutes,
            entry.outside_hours,
            entry.steps,
            entry.anxiety,
            entry.stress,
            entry.consistency
        );
    }
    let _ = writeln!(html, "</table></body></html>");
    html
}

/// File name of an export made on `day`
pub fn export_file_name(format: ExportFormat, view: TimeView, day: NaiveDate) -> String {
    match format {
        ExportFormat::Csv => format!("therapy_progress_{}_{}.csv", view.as_str(), day_string(day)),
        ExportFormat::Pdf => format!("therapy_report_{}_{}.html", view.as_str(), day_string(day)),
    }
}
