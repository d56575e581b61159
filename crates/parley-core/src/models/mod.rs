//! Record types for the QA corpus and the intent corpus.

mod intent;
mod qa_entry;

pub use intent::{Intent, IntentRecord, RESPONSE_PLACEHOLDER};
pub use qa_entry::QaEntry;
