//! Import error types

use thiserror::Error;

/// Fatal import failures.
///
/// Everything recoverable (unsupported auth schemes, unknown body kinds,
/// unresolvable references) is reported as an [`crate::ImportWarning`]
/// instead and never aborts an import.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// A source item could not be turned into a request context.
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// A request tree is larger than the configured item limit.
    #[error("too many items: {count} exceeds maximum of {max}")]
    TooManyItems {
        /// Nodes counted in the tree.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Import aborted because a context produced error-severity warnings
    /// and `skip_on_error` is off.
    #[error("import aborted due to errors")]
    Aborted,
}
