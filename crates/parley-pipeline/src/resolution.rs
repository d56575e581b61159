//! What `resolve_detailed` hands back: the answer and the stage that produced it.

use serde::Serialize;

/// The stage that answered a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A stored QA pair cleared the fuzzy threshold.
    QaEntry { question: String, score: f64 },
    IntentKeyword { intent: String },
    IntentSimilarity { intent: String, score: f64 },
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub answer: String,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ResolutionSource::Fallback)
    }

    /// Name of the matched intent, if an intent stage answered.
    pub fn intent(&self) -> Option<&str> {
        match &self.source {
            ResolutionSource::IntentKeyword { intent }
            | ResolutionSource::IntentSimilarity { intent, .. } => Some(intent),
            _ => None,
        }
    }
}
