//! Seams where production behavior is swapped for deterministic test doubles.

mod response_selector;

pub use response_selector::IResponseSelector;
