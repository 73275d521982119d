// Plagiarism check pipeline.
//
// For each regular file in the candidate directory: read it, score it
// against the input document, print the status line, and write a report
// file when it is flagged. Strictly sequential. The first error aborts the
// run; reports already written stay on disk.

use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DEFAULT_REPORT_SUFFIX;
use crate::document::Document;
use crate::error::CheckError;
use crate::output::{report, terminal};
use crate::similarity::matching::{compare_documents, MatchReport};
use crate::similarity::traits::SimilarityScorer;
use crate::similarity::Threshold;

/// Everything a caller supplies to start a check.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub input_path: PathBuf,
    pub candidate_dir: PathBuf,
    pub threshold: Threshold,
    /// Sort candidates by file name instead of using directory listing order
    pub sort: bool,
    pub report_suffix: String,
}

impl CheckRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        candidate_dir: impl Into<PathBuf>,
        threshold: Threshold,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            candidate_dir: candidate_dir.into(),
            threshold,
            sort: false,
            report_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
        }
    }

    /// Reject incomplete requests before any file is touched.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.input_path.as_os_str().is_empty() || self.candidate_dir.as_os_str().is_empty() {
            return Err(CheckError::input(
                "Please provide both input file and output directory paths.",
            ));
        }
        Ok(())
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckSummary {
    /// One report per candidate, in processing order
    pub reports: Vec<MatchReport>,
    /// Report files written for flagged candidates
    pub written: Vec<PathBuf>,
}

impl CheckSummary {
    pub fn flagged_count(&self) -> usize {
        self.reports.iter().filter(|r| r.flagged).count()
    }
}

/// List the regular files directly inside `dir`.
///
/// Subdirectories and symlinks are skipped. Order is whatever the directory
/// listing returns unless `sort` is set.
pub fn list_candidates(dir: &Path, sort: bool) -> Result<Vec<PathBuf>, CheckError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CheckError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CheckError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| CheckError::io(&path, e))?;
        if file_type.is_file() {
            files.push(path);
        } else {
            debug!(path = %path.display(), "Skipping non-regular entry");
        }
    }

    if sort {
        files.sort();
    }
    Ok(files)
}

/// Run the check described by `request`.
pub fn run(request: &CheckRequest, scorer: &dyn SimilarityScorer) -> Result<CheckSummary> {
    request.validate()?;

    let input = Document::from_path(&request.input_path)?;
    let candidates = list_candidates(&request.candidate_dir, request.sort)?;

    info!(
        input = input.name.as_str(),
        sentences = input.sentences.len(),
        candidates = candidates.len(),
        threshold = request.threshold.value(),
        "Starting plagiarism check"
    );

    let pb = ProgressBar::new(candidates.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Checking [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut summary = CheckSummary::default();

    for path in &candidates {
        let candidate = match Document::from_path(path) {
            Ok(doc) => doc,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e.into());
            }
        };

        let result = compare_documents(&input, &candidate, request.threshold, scorer);
        pb.suspend(|| println!("{}", terminal::render_status(&result)));

        let written = if result.flagged {
            let out = report::report_path(
                &request.candidate_dir,
                &result.name,
                &request.report_suffix,
            );
            if let Err(e) = report::write_report(&out, &result) {
                pb.finish_and_clear();
                return Err(e);
            }
            Some(out)
        } else {
            None
        };

        pb.suspend(|| println!("{}", terminal::render_outcome(&result, written.as_deref())));

        summary.written.extend(written);
        summary.reports.push(result);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        checked = summary.reports.len(),
        flagged = summary.flagged_count(),
        "Plagiarism check finished"
    );

    Ok(summary)
}

/// Compare two files directly, without writing a report.
pub fn compare_files(
    input_path: &Path,
    candidate_path: &Path,
    threshold: Threshold,
    scorer: &dyn SimilarityScorer,
) -> Result<MatchReport> {
    let input = Document::from_path(input_path)?;
    let candidate = Document::from_path(candidate_path)?;
    Ok(compare_documents(&input, &candidate, threshold, scorer))
}
