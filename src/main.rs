use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use plagcheck::config::Config;
use plagcheck::pipeline::check::{self, CheckRequest};
use plagcheck::similarity::tfidf::TfIdfCosine;

/// plagcheck: find copied sentences.
///
/// Compares an input document against every file in a directory, reports a
/// similarity score per file, and lists the sentences likely copied from
/// files that score at or above the threshold.
#[derive(Parser)]
#[command(name = "plagcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an input document against every file in a directory
    Check {
        /// The document to check
        #[arg(long, short)]
        input: PathBuf,

        /// Directory of candidate files (not searched recursively)
        #[arg(long, short)]
        dir: PathBuf,

        /// Similarity threshold between 0 and 1 (default: 0.8)
        #[arg(long, short, allow_hyphen_values = true)]
        threshold: Option<String>,

        /// Process candidates in file-name order
        #[arg(long)]
        sort: bool,

        /// Print the run summary as JSON when done
        #[arg(long)]
        json: bool,
    },

    /// Compare two files and list the matching sentences
    Compare {
        /// The document to check
        input: PathBuf,

        /// The document to compare it against
        candidate: PathBuf,

        /// Similarity threshold between 0 and 1 (default: 0.8)
        #[arg(long, short, allow_hyphen_values = true)]
        threshold: Option<String>,
    },

    /// Print a file's normalized text (lowercased, stop words removed, lemmatized)
    Normalize {
        /// The file to normalize
        file: PathBuf,
    },
}

fn main() {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plagcheck=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            input,
            dir,
            threshold,
            sort,
            json,
        } => {
            // Threshold is validated before any file is read
            let threshold = config.resolve_threshold(threshold.as_deref())?;

            let mut request = CheckRequest::new(input, dir, threshold);
            request.sort = sort;
            request.report_suffix = config.report_suffix.clone();

            println!(
                "Checking {} against {} (threshold {})...\n",
                request.input_path.display(),
                request.candidate_dir.display(),
                threshold
            );

            let summary = check::run(&request, &TfIdfCosine)?;

            plagcheck::output::terminal::display_completion(&summary);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }

        Commands::Compare {
            input,
            candidate,
            threshold,
        } => {
            let threshold = config.resolve_threshold(threshold.as_deref())?;
            info!(
                input = %input.display(),
                candidate = %candidate.display(),
                "Comparing two files"
            );

            let report = check::compare_files(&input, &candidate, threshold, &TfIdfCosine)?;
            plagcheck::output::terminal::display_comparison(&report);
        }

        Commands::Normalize { file } => {
            let doc = plagcheck::document::Document::from_path(&file)?;
            if doc.normalized_text.is_empty() {
                println!("{}", "(no terms left after stop-word removal)".dimmed());
            } else {
                println!("{}", doc.normalized_text);
            }
        }
    }

    Ok(())
}
