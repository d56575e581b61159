//! Non-fatal problems found while loading QA partitions and intent sources.

/// A source or record that was skipped at startup. Never fatal: loading
/// continues with whatever was readable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorpusLoadWarning {
    #[error("source not found: {path}")]
    Missing { path: String },

    #[error("malformed source {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("skipped record #{index} in {path}: {reason}")]
    InvalidRecord {
        path: String,
        index: usize,
        reason: String,
    },

    #[error("skipped duplicate question in {path}: {question}")]
    DuplicateQuestion { path: String, question: String },
}

/// Warnings accumulated over one load. Lets callers inspect what was skipped
/// while still getting the partial result.
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    pub warnings: Vec<CorpusLoadWarning>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning.
    pub fn add(&mut self, warning: CorpusLoadWarning) {
        self.warnings.push(warning);
    }

    /// Fold another report into this one, preserving order.
    pub fn merge(&mut self, other: LoadReport) {
        self.warnings.extend(other.warnings);
    }

    /// True when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
