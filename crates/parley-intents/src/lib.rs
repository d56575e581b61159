//! # parley-intents
//!
//! Resolves a query to an intent in two stages: keyword containment first,
//! TF-IDF cosine similarity over the intents' training examples second.
//!
//! ## Architecture
//!
//! ```text
//! IntentClassifier
//! ├── IntentCorpus      (validated intents, declaration order)
//! ├── keyword           (count keyword hits: substring or token mode)
//! ├── TfIdfIndex        (smoothed IDF, L2-normalized sparse vectors)
//! └── IResponseSelector (RandomSelector | FirstSelector)
//! ```

pub mod classifier;
pub mod corpus;
pub mod keyword;
pub mod selector;
pub mod tfidf;

pub use classifier::{IntentClassifier, IntentMatch, MatchStage};
pub use corpus::IntentCorpus;
pub use selector::{FirstSelector, RandomSelector};
pub use tfidf::TfIdfIndex;
