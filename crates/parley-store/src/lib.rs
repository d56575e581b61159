//! # parley-store
//!
//! The curated QA corpus. Merges JSON partitions at startup, guards the
//! in-memory entries behind a single lock, rewrites the write-target
//! partition after every append, and answers fuzzy question lookups.
//!
//! ## Architecture
//!
//! ```text
//! QaStore
//! ├── partition   (read + validate one JSON partition)
//! ├── persist     (atomic full rewrite of the write target)
//! └── fuzzy       (best stored question for a query)
//!     ├── gestalt (Ratcliff/Obershelp ratio)
//!     └── levenshtein (strsim)
//! ```

pub mod fuzzy;
pub mod partition;
pub mod persist;
pub mod store;

pub use fuzzy::FuzzyMatch;
pub use store::QaStore;
