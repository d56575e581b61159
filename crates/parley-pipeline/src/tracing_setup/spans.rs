//! Span definitions per engine operation.

/// Span around one query resolution.
#[macro_export]
macro_rules! resolve_span {
    ($query:expr) => {
        tracing::debug_span!("parley.resolve", query = %$query)
    };
}

/// Span around one QA mutation.
#[macro_export]
macro_rules! add_entry_span {
    ($question:expr) => {
        tracing::info_span!("parley.add_entry", question = %$question)
    };
}

/// Span around engine assembly from configuration.
#[macro_export]
macro_rules! load_span {
    ($base_dir:expr) => {
        tracing::info_span!("parley.load", base_dir = %$base_dir)
    };
}

