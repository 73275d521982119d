// Per-candidate report files.
//
// A flagged candidate `essay.txt` gets `essay_plagiarised.txt` next to it in
// the candidate directory. The file lists the input sentences that matched,
// in input order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use super::format_percent;
use crate::error::CheckError;
use crate::similarity::matching::MatchReport;

/// Path of the report for a candidate: `<dir>/<stem><suffix>`.
///
/// The stem is the file name without its last extension.
pub fn report_path(dir: &Path, candidate_name: &str, suffix: &str) -> PathBuf {
    let stem = Path::new(candidate_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| candidate_name.to_string());
    dir.join(format!("{stem}{suffix}"))
}

/// Render the report body.
///
/// Header, blank line, label, then one sentence per line with no trailing
/// newline after the last sentence.
pub fn render_report(report: &MatchReport) -> String {
    format!(
        "Similarity score: {}%\n\nThe following sentences are plagiarised:\n{}",
        format_percent(report.score),
        report.matched_sentences.join("\n")
    )
}

/// Write the report file, overwriting any previous report for the candidate.
pub fn write_report(path: &Path, report: &MatchReport) -> Result<()> {
    std::fs::write(path, render_report(report)).map_err(|e| CheckError::io(path, e))?;
    info!(
        path = %path.display(),
        sentences = report.matched_sentences.len(),
        "Wrote plagiarism report"
    );
    Ok(())
}
