//! QaStore: the process-wide QA corpus.
//!
//! Entries and their uniqueness keys live behind one `RwLock`. Matching holds
//! the read lock for the whole scan; `append` holds the write lock across the
//! duplicate check, the push and the partition rewrite, so concurrent appends
//! serialize and every rewrite sees a consistent snapshot.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use parley_core::config::FuzzyConfig;
use parley_core::errors::{CorpusLoadWarning, LoadReport, StoreError};
use parley_core::text::question_key;
use parley_core::QaEntry;
use tracing::{debug, info, warn};

use crate::fuzzy::{self, FuzzyMatch};
use crate::partition::read_partition;
use crate::persist::write_partition;

struct Inner {
    entries: Vec<QaEntry>,
    keys: HashSet<String>,
}

impl Inner {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Push unless the question is already present. Returns false on duplicate.
    fn insert(&mut self, entry: QaEntry) -> bool {
        if !self.keys.insert(question_key(&entry.question)) {
            return false;
        }
        self.entries.push(entry);
        true
    }
}

/// In-memory QA corpus backed by JSON partitions.
pub struct QaStore {
    inner: RwLock<Inner>,
    write_target: PathBuf,
}

impl QaStore {
    /// Merge `partitions` in order into a new store.
    ///
    /// Missing or malformed partitions and invalid or duplicate records are
    /// skipped and reported; the first occurrence of a question wins. The
    /// write target need not be among the partitions, nor exist yet.
    pub fn load<P: AsRef<Path>>(
        partitions: &[P],
        write_target: impl Into<PathBuf>,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::new();
        let mut inner = Inner::empty();

        for partition in partitions {
            let path = partition.as_ref();
            for entry in read_partition(path, &mut report) {
                let question = entry.question.clone();
                if !inner.insert(entry) {
                    debug!(path = %path.display(), question = %question, "duplicate question skipped");
                    report.add(CorpusLoadWarning::DuplicateQuestion {
                        path: path.display().to_string(),
                        question,
                    });
                }
            }
        }

        let store = Self {
            inner: RwLock::new(inner),
            write_target: write_target.into(),
        };
        info!(
            entries = store.len(),
            partitions = partitions.len(),
            skipped = report.warning_count(),
            write_target = %store.write_target.display(),
            "QA store loaded"
        );
        (store, report)
    }

    /// Build a store from entries already in memory. Duplicates after the
    /// first occurrence are dropped.
    pub fn from_entries(entries: Vec<QaEntry>, write_target: impl Into<PathBuf>) -> Self {
        let mut inner = Inner::empty();
        for entry in entries {
            inner.insert(entry);
        }
        Self {
            inner: RwLock::new(inner),
            write_target: write_target.into(),
        }
    }

    /// Append a new QA pair and rewrite the write target before returning.
    ///
    /// Both sides are trimmed. Returns the new store size. On a persistence
    /// failure the entry stays in memory and the error is returned.
    pub fn append(&self, question: &str, answer: &str) -> Result<usize, StoreError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(StoreError::Validation {
                field: "question".to_string(),
            });
        }
        if answer.is_empty() {
            return Err(StoreError::Validation {
                field: "answer".to_string(),
            });
        }

        let mut inner = self.inner.write();
        if !inner.insert(QaEntry::new(question, answer)) {
            return Err(StoreError::Duplicate {
                question: question.to_string(),
            });
        }
        let size = inner.entries.len();

        if let Err(e) = write_partition(&self.write_target, &inner.entries) {
            warn!(error = %e, "QA entry kept in memory but not persisted");
            return Err(e);
        }
        info!(question = %question, entries = size, "QA entry added");
        Ok(size)
    }

    /// Rewrite the write target with the current entries.
    pub fn persist(&self) -> Result<(), StoreError> {
        let inner = self.inner.read();
        write_partition(&self.write_target, &inner.entries)
    }

    /// Best-scoring stored question for `query`, regardless of threshold.
    pub fn best_match(&self, query: &str, config: &FuzzyConfig) -> Option<FuzzyMatch> {
        let inner = self.inner.read();
        fuzzy::best_match(query, &inner.entries, config.metric)
    }

    /// Answer of the best stored question when it reaches the threshold.
    pub fn find_answer(&self, query: &str, config: &FuzzyConfig) -> Option<String> {
        let inner = self.inner.read();
        fuzzy::match_above(query, &inner.entries, config.threshold, config.metric)
            .map(|m| m.answer)
    }

    /// True when a normalized-equal question is stored.
    pub fn contains_question(&self, question: &str) -> bool {
        self.inner.read().keys.contains(&question_key(question))
    }

    /// Snapshot of the entries in store order.
    pub fn entries(&self) -> Vec<QaEntry> {
        self.inner.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write_target(&self) -> &Path {
        &self.write_target
    }
}
