//! Thread-safe memoization for functions of one to three arguments.
//!
//! [`Memoize::memoized`] wraps a function so that each distinct argument
//! tuple is computed at most once; [`TryMemoize::try_memoized`] does the same
//! for functions returning `Result`, caching only successes.
//!
//! # Guarantees
//!
//! - **At most once**: for one wrapper (and all of its clones), the wrapped
//!   function succeeds at most once per argument key.
//! - **Failures are not cached**: an `Err` (or a panic) is passed through
//!   unchanged and the next call with the same arguments computes again.
//! - **Per-key concurrency**: callers of different keys compute in
//!   parallel; callers of the same missing key wait for the one computing it
//!   and then share its result.
//! - **No double wrapping**: memoizing a memoized function returns the same
//!   wrapper, sharing the same cache.
//! - **Unbounded**: nothing is evicted; the cache lives as long as the
//!   wrapper.
//!
//! # Keys
//!
//! Arguments are compared through [`CacheKey`]. Floats are compared by bit
//! pattern with NaNs unified, so every primitive kind can be a memoized
//! argument.
//!
//! # Examples
//!
//! ```rust
//! use lambdas::prelude::*;
//!
//! let distance = (|x: f64, y: f64| (x * x + y * y).sqrt()).memoized();
//! assert_eq!(distance.apply(3.0, 4.0), 5.0);
//! assert_eq!(distance.cached_len(), 1);
//!
//! // Wrapping again is a no-op.
//! let again = distance.clone().memoized();
//! assert!(Memoized::ptr_eq(&distance, &again));
//! assert!(again.is_memoized());
//! ```

mod cache;
mod error;
mod hasher;
mod key;
mod memoized;
mod slot;

pub use cache::MemoCache;
pub use error::MemoizeError;
pub use hasher::{DEFAULT_HASHER_NAME, DefaultBuildHasher};
pub use key::CacheKey;
pub use memoized::{Memoized, TryMemoized};
pub use slot::FillOnce;

#[cfg(feature = "derive")]
pub use lambdas_derive::CacheKey;

use static_assertions::assert_impl_all;

assert_impl_all!(Memoized<fn(i32) -> i32, (i32,), i32>: Send, Sync, Clone);
assert_impl_all!(TryMemoized<fn(f64, f64) -> Result<f64, String>, (f64, f64), f64, String>: Send, Sync, Clone);
assert_impl_all!(MemoCache<(u64, bool), String>: Send, Sync);
assert_impl_all!(FillOnce<Vec<u8>>: Send, Sync);

/// Conversion of a function into its memoized form.
///
/// Implemented for every `Fn` of one, two or three [`CacheKey`] arguments
/// with a `Clone` result, and for [`Memoized`] itself, where it returns the
/// wrapper unchanged.
pub trait Memoize<Args, R> {
    /// The memoized function.
    type Output;

    /// Wraps the function in a result cache.
    fn memoized(self) -> Self::Output;

    /// Returns `true` if the function already caches its results.
    fn is_memoized(&self) -> bool {
        false
    }
}

impl<F, A, R> Memoize<(A,), R> for F
where
    F: Fn(A) -> R,
    A: CacheKey,
    R: Clone,
{
    type Output = Memoized<F, (A,), R>;

    fn memoized(self) -> Self::Output {
        Memoized::new(self)
    }
}

impl<F, A, B, R> Memoize<(A, B), R> for F
where
    F: Fn(A, B) -> R,
    A: CacheKey,
    B: CacheKey,
    R: Clone,
{
    type Output = Memoized<F, (A, B), R>;

    fn memoized(self) -> Self::Output {
        Memoized::new(self)
    }
}

impl<F, A, B, C, R> Memoize<(A, B, C), R> for F
where
    F: Fn(A, B, C) -> R,
    A: CacheKey,
    B: CacheKey,
    C: CacheKey,
    R: Clone,
{
    type Output = Memoized<F, (A, B, C), R>;

    fn memoized(self) -> Self::Output {
        Memoized::new(self)
    }
}

impl<F, Args: CacheKey, R, S> Memoize<Args, R> for Memoized<F, Args, R, S> {
    type Output = Self;

    #[inline]
    fn memoized(self) -> Self {
        self
    }

    fn is_memoized(&self) -> bool {
        true
    }
}

/// Conversion of a fallible function into its memoized form.
///
/// Only successful results are cached.
pub trait TryMemoize<Args, T, E> {
    /// The memoized function.
    type Output;

    /// Wraps the function in a cache of successful results.
    fn try_memoized(self) -> Self::Output;

    /// Returns `true` if the function already caches its successes.
    fn is_try_memoized(&self) -> bool {
        false
    }
}

impl<F, A, T, E> TryMemoize<(A,), T, E> for F
where
    F: Fn(A) -> Result<T, E>,
    A: CacheKey,
    T: Clone,
{
    type Output = TryMemoized<F, (A,), T, E>;

    fn try_memoized(self) -> Self::Output {
        TryMemoized::new(self)
    }
}

impl<F, A, B, T, E> TryMemoize<(A, B), T, E> for F
where
    F: Fn(A, B) -> Result<T, E>,
    A: CacheKey,
    B: CacheKey,
    T: Clone,
{
    type Output = TryMemoized<F, (A, B), T, E>;

    fn try_memoized(self) -> Self::Output {
        TryMemoized::new(self)
    }
}

impl<F, A, B, C, T, E> TryMemoize<(A, B, C), T, E> for F
where
    F: Fn(A, B, C) -> Result<T, E>,
    A: CacheKey,
    B: CacheKey,
    C: CacheKey,
    T: Clone,
{
    type Output = TryMemoized<F, (A, B, C), T, E>;

    fn try_memoized(self) -> Self::Output {
        TryMemoized::new(self)
    }
}

impl<F, Args: CacheKey, T, E, S> TryMemoize<Args, T, E> for TryMemoized<F, Args, T, E, S> {
    type Output = Self;

    #[inline]
    fn try_memoized(self) -> Self {
        self
    }

    fn is_try_memoized(&self) -> bool {
        true
    }
}

/// Memoizes `function`.
///
/// Equivalent to `function.memoized()`.
pub fn memoize<F, Args, R>(function: F) -> F::Output
where
    F: Memoize<Args, R>,
{
    function.memoized()
}

/// Memoizes a fallible `function`, caching only successes.
pub fn try_memoize<F, Args, T, E>(function: F) -> F::Output
where
    F: TryMemoize<Args, T, E>,
{
    function.try_memoized()
}

/// Memoizes a function that may be absent.
///
/// # Errors
///
/// Returns [`MemoizeError::InvalidArgument`] when `function` is `None`; no
/// wrapper is created.
///
/// # Examples
///
/// ```rust
/// use lambdas::prelude::*;
/// use lambdas::memoize::memoize_option;
///
/// let present = memoize_option(Some(|value: u8| value.count_ones())).unwrap();
/// assert_eq!(present.apply(0b1011), 3);
/// ```
pub fn memoize_option<F, Args, R>(function: Option<F>) -> Result<F::Output, MemoizeError>
where
    F: Memoize<Args, R>,
{
    function.map(Memoize::memoized).ok_or_else(|| {
        tracing::warn!("refused to memoize an absent function");
        MemoizeError::missing_function()
    })
}

/// Memoizes a fallible function that may be absent.
///
/// # Errors
///
/// Returns [`MemoizeError::InvalidArgument`] when `function` is `None`.
pub fn try_memoize_option<F, Args, T, E>(function: Option<F>) -> Result<F::Output, MemoizeError>
where
    F: TryMemoize<Args, T, E>,
{
    function.map(TryMemoize::try_memoized).ok_or_else(|| {
        tracing::warn!("refused to memoize an absent fallible function");
        MemoizeError::missing_function()
    })
}
