//! Error types for memoization.
//!
//! The memoizing wrappers are transparent to the failures of the functions
//! they wrap: a fallible function's own error type is returned unchanged.
//! The only error the wrappers introduce themselves is [`MemoizeError`],
//! raised when there is no function to wrap.

use thiserror::Error;

/// Errors raised while constructing a memoizing wrapper.
///
/// # Examples
///
/// ```rust
/// use lambdas::memoize::{MemoizeError, memoize_option};
///
/// let missing: Option<fn(i32) -> i32> = None;
/// let error = memoize_option(missing).unwrap_err();
/// assert_eq!(error, MemoizeError::InvalidArgument { argument: "function" });
/// assert_eq!(
///     error.to_string(),
///     "invalid argument `function`: cannot memoize an absent function"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoizeError {
    /// The function to memoize was absent.
    #[error("invalid argument `{argument}`: cannot memoize an absent function")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
    },
}

impl MemoizeError {
    pub(crate) const fn missing_function() -> Self {
        Self::InvalidArgument {
            argument: "function",
        }
    }
}
