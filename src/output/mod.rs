// Output formatting: status lines, report files, terminal display.
//
// The line builders here return plain strings so the exact wording can be
// tested without a terminal. `terminal` adds color, `report` writes files.

pub mod report;
pub mod terminal;

use crate::similarity::matching::MatchReport;

/// Format a [0, 1] score as a percentage with two decimals, without the `%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.2}", score * 100.0)
}

/// `File: <name> - Similarity Score: <pct>%`
pub fn status_line(report: &MatchReport) -> String {
    format!(
        "File: {} - Similarity Score: {}%",
        report.name,
        format_percent(report.score)
    )
}

/// Line printed after a flagged candidate's report has been written.
pub fn flagged_line(report: &MatchReport, report_path: &std::path::Path) -> String {
    format!(
        "Plagiarism detected in file: {}. Results saved to {}.",
        report.name,
        report_path.display()
    )
}

/// Line printed for a candidate under the threshold.
pub fn clear_line(report: &MatchReport) -> String {
    format!("No significant plagiarism detected in file: {}.", report.name)
}

pub const COMPLETED_LINE: &str = "Plagiarism check completed successfully.";
