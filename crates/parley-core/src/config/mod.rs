//! Configuration system for Parley.
//! TOML-based, `serde(default)` everywhere: file > env overrides > compiled defaults.

pub mod defaults;
pub mod fuzzy_config;
pub mod intent_config;
pub mod parley_config;
pub mod response_config;
pub mod store_config;

pub use fuzzy_config::{FuzzyConfig, FuzzyMetric};
pub use intent_config::{IntentConfig, KeywordMatch, VectorResponse};
pub use parley_config::ParleyConfig;
pub use response_config::ResponseConfig;
pub use store_config::StoreConfig;
