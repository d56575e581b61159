use serde::{Deserialize, Serialize};

use super::defaults;

/// How intent keywords are matched against a normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatch {
    /// Keyword appears anywhere in the normalized query string.
    #[default]
    Substring,
    /// Every token of the keyword is a whitespace token of the query.
    Token,
}

impl std::str::FromStr for KeywordMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "token" => Ok(Self::Token),
            other => Err(format!("unknown keyword match style: {other}")),
        }
    }
}

/// Which response the similarity stage returns for the winning intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorResponse {
    #[default]
    Random,
    First,
}

/// Intent corpus and classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    /// Intent documents loaded at startup, in order.
    pub sources: Vec<String>,
    pub keyword_match: KeywordMatch,
    /// Minimum cosine similarity (inclusive) for the vector stage.
    pub similarity_threshold: f64,
    pub vector_response: VectorResponse,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            sources: vec![defaults::DEFAULT_INTENT_SOURCE.to_string()],
            keyword_match: KeywordMatch::default(),
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            vector_response: VectorResponse::default(),
        }
    }
}
