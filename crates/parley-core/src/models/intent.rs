use serde::{Deserialize, Serialize};

/// Placeholder a template substitutes with the chosen response.
pub const RESPONSE_PLACEHOLDER: &str = "{resposta}";

/// An intent record exactly as it appears in an intent document.
///
/// Every field is optional at this layer; shape validation happens when the
/// corpus converts records into [`Intent`]s.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentRecord {
    #[serde(default, alias = "intent", alias = "tag")]
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, alias = "examples")]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default)]
    pub template: Option<String>,
}

/// A validated, immutable intent.
///
/// `keywords` and `patterns` hold normalized text; `keywords` is
/// de-duplicated in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intent {
    pub name: String,
    pub keywords: Vec<String>,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
    pub template: Option<String>,
}

impl Intent {
    /// Examples the similarity index trains on: patterns, or keywords when
    /// the intent declares no patterns.
    pub fn training_examples(&self) -> &[String] {
        if self.patterns.is_empty() {
            &self.keywords
        } else {
            &self.patterns
        }
    }
}
