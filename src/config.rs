use std::env;

use anyhow::Result;

use crate::similarity::Threshold;

/// Default suffix for per-candidate report files.
pub const DEFAULT_REPORT_SUFFIX: &str = "_plagiarised.txt";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw PLAGCHECK_THRESHOLD, used when `--threshold` is not given.
    /// Validated only when a run falls back to it.
    pub threshold_env: Option<String>,
    /// Appended to a candidate's file stem to name its report
    /// (PLAGCHECK_REPORT_SUFFIX)
    pub report_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold_env: None,
            report_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. A PLAGCHECK_THRESHOLD outside [0, 1] is an
    /// error rather than being silently replaced, but only for a run that
    /// has no `--threshold` of its own.
    pub fn load() -> Result<Self> {
        let threshold_env = env::var("PLAGCHECK_THRESHOLD")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let report_suffix = env::var("PLAGCHECK_REPORT_SUFFIX")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_SUFFIX.to_string());

        Ok(Self {
            threshold_env,
            report_suffix,
        })
    }

    /// Pick the threshold for a run: the command-line value if present,
    /// otherwise PLAGCHECK_THRESHOLD, otherwise 0.8.
    pub fn resolve_threshold(&self, cli_value: Option<&str>) -> Result<Threshold> {
        match cli_value.or(self.threshold_env.as_deref()) {
            Some(raw) => Ok(raw.parse::<Threshold>()?),
            None => Ok(Threshold::default()),
        }
    }
}
