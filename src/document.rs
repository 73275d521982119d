// Document: raw text plus the two derived views the check needs.

use std::path::Path;

use crate::error::CheckError;
use crate::text::{normalize, split_sentences};

/// A text prepared for comparison. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name used in status lines and reports (empty for ad-hoc text)
    pub name: String,
    pub raw: String,
    /// Raw sentences in original order, used for sentence-level matching
    pub sentences: Vec<String>,
    /// Stop-word-free lemma string, used for document-level scoring
    pub normalized_text: String,
}

impl Document {
    /// Build a document from in-memory text.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let sentences = split_sentences(&raw);
        let normalized_text = normalize(&raw);
        Self {
            name: name.into(),
            raw,
            sentences,
            normalized_text,
        }
    }

    /// Read a UTF-8 file and build a document named after its file name.
    pub fn from_path(path: &Path) -> Result<Self, CheckError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, raw))
    }
}
