//! # lambdas
//!
//! Function combinators for functions of one to three arguments, with
//! thread-safe memoization.
//!
//! ## Overview
//!
//! - **Function traits**: [`Function1`](function::Function1),
//!   [`Function2`](function::Function2) and [`Function3`](function::Function3)
//!   give every closure `compose`, `and_then`, `consume`, `reversed`,
//!   `partial`, `curried` and `boxed`; the `TryFunction*` traits add
//!   `map_ok`, `and_then_try`, `recover`, `or_return` and `ok` to functions
//!   returning `Result`.
//! - **Memoization**: [`Memoize::memoized`](memoize::Memoize::memoized) and
//!   [`TryMemoize::try_memoized`](memoize::TryMemoize::try_memoized) cache
//!   results per argument tuple, computing each at most once even under
//!   concurrent calls. Failures are never cached.
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(CacheKey)]` for user argument types
//! - `fxhash`: memo caches hash keys with `rustc-hash`
//! - `ahash`: memo caches hash keys with `ahash`
//!
//! ## Example
//!
//! ```rust
//! use lambdas::prelude::*;
//!
//! let slow_square = |value: u64| value * value;
//! let square = slow_square.memoized();
//!
//! assert_eq!(square.apply(12), 144);
//! assert_eq!(square.apply(12), 144);
//! assert_eq!(square.cached_len(), 1);
//!
//! let describe = square.and_then(|value: u64| format!("{value} units"));
//! assert_eq!(describe(3), "9 units");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the function traits, the memoization traits and wrappers.
///
/// # Usage
///
/// ```rust
/// use lambdas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;
    pub use crate::memoize::{CacheKey, Memoize, Memoized, TryMemoize, TryMemoized};
}

pub mod function;
pub mod memoize;
