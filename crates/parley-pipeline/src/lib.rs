//! # parley-pipeline
//!
//! The answering engine. A query is tried against the QA store first, then
//! the intent classifier, and falls back to a fixed message when neither
//! matches. New QA pairs enter through the same engine.
//!
//! ## Resolution order
//!
//! ```text
//! query ─ trim ─┬─ empty ──────────────► ResolveError::EmptyQuery
//!               ├─ fuzzy QA match ─────► stored answer
//!               ├─ keyword intent ─────► response (+ template)
//!               ├─ similar intent ─────► response (+ template)
//!               └─ otherwise ──────────► fallback message
//! ```

pub mod engine;
pub mod resolution;
pub mod template;
pub mod tracing_setup;

pub use engine::{AddAck, EngineStats, ParleyEngine};
pub use resolution::{Resolution, ResolutionSource};
pub use tracing_setup::init_tracing;
