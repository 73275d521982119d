// Similarity scoring: TF-IDF cosine between two texts, the flagging
// threshold, and the sentence-level matcher built on top of them.

pub mod matching;
pub mod tfidf;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// A flagging threshold in [0, 1]. A score is flagged iff `score >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: f64 = 0.8;

    /// Validate a raw threshold value. NaN and values outside [0, 1] are rejected.
    pub fn new(value: f64) -> Result<Self, CheckError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(CheckError::input(
                "Similarity threshold must be between 0 and 1.",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Inclusive comparison: a score exactly at the threshold is flagged.
    pub fn is_met_by(self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl FromStr for Threshold {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().map_err(|_| {
            CheckError::input(format!("Similarity threshold must be a number, got {s:?}."))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
