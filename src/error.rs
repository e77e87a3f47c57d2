//! Errors in the raw input, detected before any operation runs.
use thiserror::Error;

/// The ways raw command-line text can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An operand holds something other than letters, digits, commas and whitespace
    #[error("only letters, digits, commas and spaces are allowed, but the {field} operand contains {found:?}")]
    InvalidCharacter {
        /// Which operand (`first` or `second`) was rejected
        field: &'static str,
        /// The first offending character
        found: char,
    },

    /// The iteration count is not a whole number
    #[error("the iteration count must be a non-negative whole number, not {0:?}")]
    InvalidIterationBound(String),

    /// The iteration count is a whole number, but too large to compute
    #[error("the iteration count {given} is larger than the limit of {limit}")]
    IterationBoundTooLarge {
        /// The count as given
        given: String,
        /// The largest count allowed for the operation
        limit: u32,
    },
}
