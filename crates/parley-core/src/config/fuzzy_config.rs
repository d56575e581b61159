use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity metric used to compare a query against stored questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyMetric {
    /// Ratcliff/Obershelp matching-blocks ratio.
    #[default]
    Gestalt,
    /// Normalized Levenshtein similarity.
    Levenshtein,
}

impl std::str::FromStr for FuzzyMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gestalt" => Ok(Self::Gestalt),
            "levenshtein" => Ok(Self::Levenshtein),
            other => Err(format!("unknown fuzzy metric: {other}")),
        }
    }
}

/// Fuzzy QA matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Minimum score (inclusive) for a stored question to match.
    pub threshold: f64,
    pub metric: FuzzyMetric,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_FUZZY_THRESHOLD,
            metric: FuzzyMetric::default(),
        }
    }
}
