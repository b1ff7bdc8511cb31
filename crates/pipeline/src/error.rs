//! Error types for predicate argument parsing.

use thiserror::Error;

/// Errors raised while turning raw argument tokens into a predicate
#[derive(Error, Debug)]
pub enum PredicateError {
    /// A token that does not parse as the expected type or value
    #[error("invalid argument for {predicate}: {value:?}")]
    InvalidArgument { predicate: String, value: String },

    /// Fewer tokens than the predicate needs
    #[error("insufficient arguments for {predicate}: expected at least {expected}, found {found}")]
    InsufficientArguments {
        predicate: String,
        expected: usize,
        found: usize,
    },

    /// Description pattern that is not a valid regular expression
    #[error("invalid pattern")]
    InvalidPattern(#[from] regex::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PredicateError>;
