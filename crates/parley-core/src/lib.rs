//! # parley-core
//!
//! Foundation crate for the Parley answering engine.
//! Defines the QA and intent records, errors, config, the response selector
//! trait, and the text normalizer every matching stage compares through.

pub mod config;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ParleyConfig;
pub use errors::{ParleyError, ParleyResult};
pub use models::{Intent, QaEntry};
pub use text::normalize;
