use serde::{Deserialize, Serialize};

use super::defaults;

/// Fixed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Returned when no stage matches.
    pub fallback: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            fallback: defaults::DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}
