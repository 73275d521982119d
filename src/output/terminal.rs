// Colored terminal output for check results.
//
// Wording comes from the plain line builders in `output`; this module only
// adds color and decides what goes to stdout.

use colored::Colorize;

use super::{clear_line, flagged_line, status_line, COMPLETED_LINE};
use crate::pipeline::check::CheckSummary;
use crate::similarity::matching::MatchReport;

/// Status line for one candidate, colored by outcome.
pub fn render_status(report: &MatchReport) -> String {
    let line = status_line(report);
    if report.flagged {
        line.bold().to_string()
    } else {
        line
    }
}

/// Follow-up line for one candidate, plus the blank separator line.
pub fn render_outcome(report: &MatchReport, report_path: Option<&std::path::Path>) -> String {
    match report_path {
        Some(path) => format!("{}\n", flagged_line(report, path).red().bold()),
        None => format!("{}\n", clear_line(report).green()),
    }
}

/// Display the result of a two-file comparison.
pub fn display_comparison(report: &MatchReport) {
    println!("{}", render_status(report));

    if !report.flagged {
        println!("{}", clear_line(report).green());
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== {} matched sentence(s) ===",
            report.matched_sentences.len()
        )
        .bold()
    );
    for (i, sentence) in report.matched_sentences.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, sentence);
    }
}

/// Display the end-of-run acknowledgment and a short tally.
pub fn display_completion(summary: &CheckSummary) {
    let flagged = summary.flagged_count();
    println!("{}", COMPLETED_LINE.bold());
    println!(
        "  Files checked: {}  |  Flagged: {}",
        summary.reports.len(),
        if flagged > 0 {
            flagged.to_string().red().bold()
        } else {
            flagged.to_string().green()
        }
    );
}
