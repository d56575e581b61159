//! Resolution errors. Only caller mistakes; a valid query always resolves.

use super::error_code::{self, ParleyErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("query must not be empty")]
    EmptyQuery,
}

impl ParleyErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => error_code::EMPTY_QUERY,
        }
    }
}
