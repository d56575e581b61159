//! IntentClassifier: keyword stage, then TF-IDF similarity stage.
//!
//! Built once from an [`IntentCorpus`]; both the corpus and the index are
//! read-only afterwards, so a classifier can be shared across threads freely.

use parley_core::config::{IntentConfig, KeywordMatch, VectorResponse};
use parley_core::text::normalize;
use parley_core::traits::IResponseSelector;
use parley_core::Intent;
use tracing::debug;

use crate::corpus::IntentCorpus;
use crate::keyword;
use crate::selector::{FirstSelector, RandomSelector};
use crate::tfidf::TfIdfIndex;

/// Which stage produced an [`IntentMatch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchStage {
    Keyword { hits: usize },
    Similarity { score: f64 },
}

/// A resolved intent with the response chosen for it.
///
/// `template` is handed back untouched; applying it is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentMatch {
    pub intent: String,
    pub response: String,
    pub template: Option<String>,
    pub stage: MatchStage,
}

pub struct IntentClassifier {
    corpus: IntentCorpus,
    index: Option<TfIdfIndex>,
    keyword_match: KeywordMatch,
    similarity_threshold: f64,
    vector_response: VectorResponse,
    selector: Box<dyn IResponseSelector>,
}

impl IntentClassifier {
    /// Build the classifier and train its similarity index.
    pub fn new(corpus: IntentCorpus, config: &IntentConfig) -> Self {
        let examples: Vec<(String, usize)> = corpus
            .intents()
            .iter()
            .enumerate()
            .flat_map(|(label, intent)| {
                intent
                    .training_examples()
                    .iter()
                    .map(move |example| (example.clone(), label))
            })
            .collect();
        let index = TfIdfIndex::fit(&examples);

        debug!(
            intents = corpus.len(),
            examples = index.as_ref().map_or(0, TfIdfIndex::len),
            vocabulary = index.as_ref().map_or(0, TfIdfIndex::vocabulary_size),
            "intent classifier built"
        );

        Self {
            corpus,
            index,
            keyword_match: config.keyword_match,
            similarity_threshold: config.similarity_threshold,
            vector_response: config.vector_response,
            selector: Box::new(RandomSelector),
        }
    }

    /// Classifier over no intents. Never matches.
    pub fn empty() -> Self {
        Self::new(IntentCorpus::default(), &IntentConfig::default())
    }

    /// Replace the response selector (e.g. [`FirstSelector`] in tests).
    pub fn with_selector(mut self, selector: Box<dyn IResponseSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Resolve `query` to an intent, or `None` when neither stage matches.
    pub fn classify(&self, query: &str) -> Option<IntentMatch> {
        let normalized = normalize(query);
        let intents = self.corpus.intents();

        if let Some((index, hits)) = keyword::best_intent(&normalized, intents, self.keyword_match) {
            let intent = &intents[index];
            debug!(intent = %intent.name, hits, "keyword match");
            return self.build_match(intent, self.selector.as_ref(), MatchStage::Keyword { hits });
        }

        let (label, score) = self.index.as_ref()?.best(&normalized)?;
        if score < self.similarity_threshold {
            debug!(score, threshold = self.similarity_threshold, "no intent above similarity threshold");
            return None;
        }

        let intent = self.corpus.get(label)?;
        debug!(intent = %intent.name, score, "similarity match");
        let selector: &dyn IResponseSelector = match self.vector_response {
            VectorResponse::Random => self.selector.as_ref(),
            VectorResponse::First => &FirstSelector,
        };
        self.build_match(intent, selector, MatchStage::Similarity { score })
    }

    fn build_match(
        &self,
        intent: &Intent,
        selector: &dyn IResponseSelector,
        stage: MatchStage,
    ) -> Option<IntentMatch> {
        let response = selector.select(&intent.responses)?;
        Some(IntentMatch {
            intent: intent.name.clone(),
            response: response.to_string(),
            template: intent.template.clone(),
            stage,
        })
    }

    pub fn corpus(&self) -> &IntentCorpus {
        &self.corpus
    }

    /// Number of training examples in the similarity index.
    pub fn indexed_examples(&self) -> usize {
        self.index.as_ref().map_or(0, TfIdfIndex::len)
    }
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("intents", &self.corpus.len())
            .field("indexed_examples", &self.indexed_examples())
            .field("keyword_match", &self.keyword_match)
            .field("similarity_threshold", &self.similarity_threshold)
            .field("vector_response", &self.vector_response)
            .field("selector", &self.selector.name())
            .finish()
    }
}
