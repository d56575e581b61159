//! ParleyEngine: the process-wide answering engine.
//!
//! Owns the QA store, the intent classifier and the fallback message. The
//! store synchronizes its own mutations; everything else is read-only, so one
//! engine behind an `Arc` serves any number of request threads.

use std::path::Path;

use parley_core::config::FuzzyConfig;
use parley_core::errors::{LoadReport, ResolveError, StoreError};
use parley_core::{ParleyConfig, ParleyResult};
use parley_intents::{IntentClassifier, IntentCorpus, MatchStage};
use parley_store::QaStore;
use serde::Serialize;
use tracing::{debug, info};

use crate::resolution::{Resolution, ResolutionSource};
use crate::template::apply_template;

/// Acknowledgement of a stored QA pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddAck {
    /// The question as stored (trimmed).
    pub question: String,
    pub total_entries: usize,
}

/// Sizes of the loaded corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub qa_entries: usize,
    pub intents: usize,
    pub indexed_examples: usize,
}

pub struct ParleyEngine {
    store: QaStore,
    classifier: IntentClassifier,
    fuzzy: FuzzyConfig,
    fallback: String,
}

impl ParleyEngine {
    /// Assemble an engine from parts. Fuzzy matching uses default settings
    /// until [`with_fuzzy_config`](Self::with_fuzzy_config) says otherwise.
    pub fn new(store: QaStore, classifier: IntentClassifier, fallback: impl Into<String>) -> Self {
        Self {
            store,
            classifier,
            fuzzy: FuzzyConfig::default(),
            fallback: fallback.into(),
        }
    }

    pub fn with_fuzzy_config(mut self, fuzzy: FuzzyConfig) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Load the QA partitions and intent documents named by `config`.
    ///
    /// The write target is always read, even when not listed as a partition.
    /// Relative paths resolve against `base_dir`. Unreadable sources and bad
    /// records are skipped and collected in the returned report; an engine
    /// is always produced.
    pub fn from_config(config: &ParleyConfig, base_dir: &Path) -> (Self, LoadReport) {
        let _span = crate::load_span!(base_dir.display()).entered();

        let partitions: Vec<_> = config
            .store
            .load_order()
            .into_iter()
            .map(|p| base_dir.join(p))
            .collect();
        let write_target = base_dir.join(config.store.effective_write_target());
        let (store, mut report) = QaStore::load(&partitions, write_target);

        let sources: Vec<_> = config
            .intents
            .sources
            .iter()
            .map(|s| base_dir.join(s))
            .collect();
        let (corpus, intent_report) = IntentCorpus::load(&sources);
        report.merge(intent_report);

        let classifier = IntentClassifier::new(corpus, &config.intents);
        let engine = Self {
            store,
            classifier,
            fuzzy: config.fuzzy.clone(),
            fallback: config.responses.fallback.clone(),
        };

        let stats = engine.stats();
        info!(
            qa_entries = stats.qa_entries,
            intents = stats.intents,
            indexed_examples = stats.indexed_examples,
            warnings = report.warning_count(),
            "engine ready"
        );
        (engine, report)
    }

    /// Read the TOML config at `config_path` (missing file → defaults, then
    /// `PARLEY_*` overrides) and load the engine relative to its directory.
    pub fn open(config_path: &Path) -> ParleyResult<(Self, LoadReport)> {
        let config = ParleyConfig::load(config_path)?;
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_config(&config, base_dir))
    }

    /// Answer text for `query`. Any non-blank query gets an answer.
    pub fn resolve(&self, query: &str) -> Result<String, ResolveError> {
        self.resolve_detailed(query).map(|r| r.answer)
    }

    /// Answer plus the stage that produced it.
    pub fn resolve_detailed(&self, query: &str) -> Result<Resolution, ResolveError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolveError::EmptyQuery);
        }
        let _span = crate::resolve_span!(query).entered();

        if let Some(m) = self.store.best_match(query, &self.fuzzy) {
            if m.score >= self.fuzzy.threshold {
                debug!(question = %m.question, score = m.score, "QA match");
                return Ok(Resolution {
                    answer: m.answer,
                    source: ResolutionSource::QaEntry {
                        question: m.question,
                        score: m.score,
                    },
                });
            }
            debug!(score = m.score, threshold = self.fuzzy.threshold, "best QA match below threshold");
        }

        if let Some(m) = self.classifier.classify(query) {
            let answer = apply_template(m.template.as_deref(), &m.response);
            let source = match m.stage {
                MatchStage::Keyword { .. } => ResolutionSource::IntentKeyword { intent: m.intent },
                MatchStage::Similarity { score } => ResolutionSource::IntentSimilarity {
                    intent: m.intent,
                    score,
                },
            };
            return Ok(Resolution { answer, source });
        }

        debug!("no stage matched, using fallback");
        Ok(Resolution {
            answer: self.fallback.clone(),
            source: ResolutionSource::Fallback,
        })
    }

    /// Store a new QA pair and persist it before returning.
    pub fn add_entry(&self, question: &str, answer: &str) -> Result<AddAck, StoreError> {
        let question = question.trim();
        let _span = crate::add_entry_span!(question).entered();
        let total_entries = self.store.append(question, answer)?;
        Ok(AddAck {
            question: question.to_string(),
            total_entries,
        })
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            qa_entries: self.store.len(),
            intents: self.classifier.corpus().len(),
            indexed_examples: self.classifier.indexed_examples(),
        }
    }

    pub fn store(&self) -> &QaStore {
        &self.store
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback
    }
}
