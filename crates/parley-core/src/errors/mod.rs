//! Error handling for Parley.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod load_warning;
pub mod resolve_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::ParleyErrorCode;
pub use load_warning::{CorpusLoadWarning, LoadReport};
pub use resolve_error::ResolveError;
pub use store_error::StoreError;

/// Umbrella error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ParleyError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ParleyErrorCode for ParleyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Resolve(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ParleyResult<T> = Result<T, ParleyError>;
