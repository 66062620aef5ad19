//! Memoizing wrappers for functions of one to three arguments.

use std::any::type_name;
use std::fmt;
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::sync::Arc;

use super::cache::MemoCache;
use super::hasher::DefaultBuildHasher;
use super::key::CacheKey;
use crate::function::{
    Function1, Function2, Function3, TryFunction1, TryFunction2, TryFunction3,
};

struct Shared<F, K, V, S> {
    function: F,
    cache: MemoCache<K, V, S>,
}

impl<F, K, V, S> Shared<F, K, V, S> {
    fn new<Args>(function: F, cache: MemoCache<K, V, S>) -> Arc<Self> {
        tracing::debug!(arguments = type_name::<Args>(), "created memoized function");
        Arc::new(Self { function, cache })
    }
}

/// A function whose results are cached per argument tuple.
///
/// `Args` is the argument tuple (`(A,)`, `(A, B)` or `(A, B, C)`) and `R`
/// the result type. The wrapped function runs at most once per distinct
/// key; later calls return a clone of the stored result. Clones of a
/// `Memoized` share one cache.
///
/// Build one with [`Memoize::memoized`](super::Memoize::memoized) and call it
/// through [`Function1`], [`Function2`] or [`Function3`].
///
/// # Examples
///
/// ```rust
/// use lambdas::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// static CALLS: AtomicUsize = AtomicUsize::new(0);
///
/// let double = (|value: i32| {
///     CALLS.fetch_add(1, Ordering::SeqCst);
///     value * 2
/// })
/// .memoized();
///
/// assert_eq!(double.apply(3), 6);
/// assert_eq!(double.apply(3), 6);
/// assert_eq!(CALLS.load(Ordering::SeqCst), 1);
/// assert!(double.is_cached(&(3,)));
/// ```
pub struct Memoized<F, Args: CacheKey, R, S = DefaultBuildHasher> {
    shared: Arc<Shared<F, Args::Key, R, S>>,
    arguments: PhantomData<fn(Args)>,
}

impl<F, Args: CacheKey, R> Memoized<F, Args, R> {
    /// Wraps `function` with an empty cache using the default hasher.
    pub fn new(function: F) -> Self {
        Self::with_hasher(function, DefaultBuildHasher::default())
    }

    /// Wraps `function` with room for `capacity` cached results.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(function, capacity, DefaultBuildHasher::default())
    }
}

impl<F, Args: CacheKey, R, S> Memoized<F, Args, R, S> {
    /// Wraps `function` with an empty cache hashed by `hasher`.
    pub fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            shared: Shared::new::<Args>(function, MemoCache::with_hasher(hasher)),
            arguments: PhantomData,
        }
    }

    /// Wraps `function` with room for `capacity` results, hashed by `hasher`.
    pub fn with_capacity_and_hasher(function: F, capacity: usize, hasher: S) -> Self {
        Self {
            shared: Shared::new::<Args>(
                function,
                MemoCache::with_capacity_and_hasher(capacity, hasher),
            ),
            arguments: PhantomData,
        }
    }

    /// The wrapped function. Calling it directly bypasses the cache.
    pub fn function(&self) -> &F {
        &self.shared.function
    }

    /// Number of cached results.
    pub fn cached_len(&self) -> usize {
        self.shared.cache.len()
    }

    /// Returns `true` if both handles share the same cache.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.shared, &other.shared)
    }

    /// Returns `true` if a result is cached for `arguments`.
    pub fn is_cached(&self, arguments: &Args) -> bool
    where
        S: BuildHasher,
    {
        self.shared.cache.contains_key(&arguments.to_key())
    }
}

impl<F, Args: CacheKey, R, S> Clone for Memoized<F, Args, R, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            arguments: PhantomData,
        }
    }
}

impl<F, Args: CacheKey, R, S> fmt::Debug for Memoized<F, Args, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("arguments", &type_name::<Args>())
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}

impl<F, A, R, S> Function1<A, R> for Memoized<F, (A,), R, S>
where
    F: Function1<A, R>,
    A: CacheKey,
    R: Clone,
    S: BuildHasher,
{
    fn apply(&self, argument: A) -> R {
        let key = (argument.to_key(),);
        self.shared
            .cache
            .get_or_insert_with(key, || self.shared.function.apply(argument))
    }
}

impl<F, A, B, R, S> Function2<A, B, R> for Memoized<F, (A, B), R, S>
where
    F: Function2<A, B, R>,
    A: CacheKey,
    B: CacheKey,
    R: Clone,
    S: BuildHasher,
{
    fn apply(&self, first: A, second: B) -> R {
        let key = (first.to_key(), second.to_key());
        self.shared
            .cache
            .get_or_insert_with(key, || self.shared.function.apply(first, second))
    }
}

impl<F, A, B, C, R, S> Function3<A, B, C, R> for Memoized<F, (A, B, C), R, S>
where
    F: Function3<A, B, C, R>,
    A: CacheKey,
    B: CacheKey,
    C: CacheKey,
    R: Clone,
    S: BuildHasher,
{
    fn apply(&self, first: A, second: B, third: C) -> R {
        let key = (first.to_key(), second.to_key(), third.to_key());
        self.shared.cache.get_or_insert_with(key, || {
            self.shared.function.apply(first, second, third)
        })
    }
}

/// A fallible function whose successful results are cached per argument tuple.
///
/// Successes are stored exactly like [`Memoized`] stores results. Failures
/// are returned to the caller unchanged and never stored: the next call with
/// the same arguments runs the function again.
///
/// # Examples
///
/// ```rust
/// use lambdas::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);
///
/// let flaky = (|value: u32| {
///     if ATTEMPTS.fetch_add(1, Ordering::SeqCst) == 0 {
///         Err("warming up")
///     } else {
///         Ok(value + 1)
///     }
/// })
/// .try_memoized();
///
/// assert_eq!(flaky.apply(0), Err("warming up"));
/// assert_eq!(flaky.apply(0), Ok(1));
/// assert_eq!(flaky.apply(0), Ok(1));
/// assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
/// ```
pub struct TryMemoized<F, Args: CacheKey, T, E, S = DefaultBuildHasher> {
    shared: Arc<Shared<F, Args::Key, T, S>>,
    signature: PhantomData<fn(Args) -> E>,
}

impl<F, Args: CacheKey, T, E> TryMemoized<F, Args, T, E> {
    /// Wraps `function` with an empty cache using the default hasher.
    pub fn new(function: F) -> Self {
        Self::with_hasher(function, DefaultBuildHasher::default())
    }

    /// Wraps `function` with room for `capacity` cached results.
    pub fn with_capacity(function: F, capacity: usize) -> Self {
        Self::with_capacity_and_hasher(function, capacity, DefaultBuildHasher::default())
    }
}

impl<F, Args: CacheKey, T, E, S> TryMemoized<F, Args, T, E, S> {
    /// Wraps `function` with an empty cache hashed by `hasher`.
    pub fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            shared: Shared::new::<Args>(function, MemoCache::with_hasher(hasher)),
            signature: PhantomData,
        }
    }

    /// Wraps `function` with room for `capacity` results, hashed by `hasher`.
    pub fn with_capacity_and_hasher(function: F, capacity: usize, hasher: S) -> Self {
        Self {
            shared: Shared::new::<Args>(
                function,
                MemoCache::with_capacity_and_hasher(capacity, hasher),
            ),
            signature: PhantomData,
        }
    }

    /// The wrapped function. Calling it directly bypasses the cache.
    pub fn function(&self) -> &F {
        &self.shared.function
    }

    /// Number of cached successes.
    pub fn cached_len(&self) -> usize {
        self.shared.cache.len()
    }

    /// Returns `true` if both handles share the same cache.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.shared, &other.shared)
    }

    /// Returns `true` if a success is cached for `arguments`.
    pub fn is_cached(&self, arguments: &Args) -> bool
    where
        S: BuildHasher,
    {
        self.shared.cache.contains_key(&arguments.to_key())
    }
}

impl<F, Args: CacheKey, T, E, S> Clone for TryMemoized<F, Args, T, E, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            signature: PhantomData,
        }
    }
}

impl<F, Args: CacheKey, T, E, S> fmt::Debug for TryMemoized<F, Args, T, E, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized")
            .field("arguments", &type_name::<Args>())
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}

impl<F, A, T, E, S> Function1<A, Result<T, E>> for TryMemoized<F, (A,), T, E, S>
where
    F: Function1<A, Result<T, E>>,
    A: CacheKey,
    T: Clone,
    S: BuildHasher,
{
    fn apply(&self, argument: A) -> Result<T, E> {
        let key = (argument.to_key(),);
        self.shared
            .cache
            .get_or_try_insert_with(key, || self.shared.function.apply(argument))
    }
}

impl<F, A, T, E, S> TryFunction1<A, T, E> for TryMemoized<F, (A,), T, E, S>
where
    F: Function1<A, Result<T, E>>,
    A: CacheKey,
    T: Clone,
    S: BuildHasher,
{
}

impl<F, A, B, T, E, S> Function2<A, B, Result<T, E>> for TryMemoized<F, (A, B), T, E, S>
where
    F: Function2<A, B, Result<T, E>>,
    A: CacheKey,
    B: CacheKey,
    T: Clone,
    S: BuildHasher,
{
    fn apply(&self, first: A, second: B) -> Result<T, E> {
        let key = (first.to_key(), second.to_key());
        self.shared
            .cache
            .get_or_try_insert_with(key, || self.shared.function.apply(first, second))
    }
}

impl<F, A, B, T, E, S> TryFunction2<A, B, T, E> for TryMemoized<F, (A, B), T, E, S>
where
    F: Function2<A, B, Result<T, E>>,
    A: CacheKey,
    B: CacheKey,
    T: Clone,
    S: BuildHasher,
{
}

impl<F, A, B, C, T, E, S> Function3<A, B, C, Result<T, E>> for TryMemoized<F, (A, B, C), T, E, S>
where
    F: Function3<A, B, C, Result<T, E>>,
    A: CacheKey,
    B: CacheKey,
    C: CacheKey,
    T: Clone,
    S: BuildHasher,
{
    fn apply(&self, first: A, second: B, third: C) -> Result<T, E> {
        let key = (first.to_key(), second.to_key(), third.to_key());
        self.shared.cache.get_or_try_insert_with(key, || {
            self.shared.function.apply(first, second, third)
        })
    }
}

impl<F, A, B, C, T, E, S> TryFunction3<A, B, C, T, E> for TryMemoized<F, (A, B, C), T, E, S>
where
    F: Function3<A, B, C, Result<T, E>>,
    A: CacheKey,
    B: CacheKey,
    C: CacheKey,
    T: Clone,
    S: BuildHasher,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::RandomState;

    #[rstest]
    fn clones_share_one_cache() {
        let square = Memoized::<_, (i64,), i64>::new(|value: i64| value * value);
        let copy = square.clone();

        assert_eq!(square.apply(9), 81);
        assert!(copy.is_cached(&(9,)));
        assert!(Memoized::ptr_eq(&square, &copy));
        assert_eq!(copy.cached_len(), 1);
    }

    #[rstest]
    fn custom_hasher_is_used() {
        let join = Memoized::<_, (String, char), String, RandomState>::with_capacity_and_hasher(
            |text: String, suffix: char| format!("{text}{suffix}"),
            4,
            RandomState::new(),
        );
        assert_eq!(join.apply("a".to_owned(), '!'), "a!");
        assert_eq!(join.cached_len(), 1);
    }

    #[rstest]
    fn debug_reports_arity_and_size() {
        let add = Memoized::<_, (u8, u8, u8), u8>::new(|a: u8, b: u8, c: u8| a + b + c);
        assert_eq!(add.apply(1, 2, 3), 6);
        let rendered = format!("{add:?}");
        assert!(rendered.starts_with("Memoized { arguments: \"(u8, u8, u8)\", cached: 1"));
    }

    #[rstest]
    fn direct_function_access_bypasses_cache() {
        let negate = TryMemoized::<_, (i32,), i32, ()>::new(|value: i32| Ok::<_, ()>(-value));
        assert_eq!((negate.function())(4), Ok(-4));
        assert_eq!(negate.cached_len(), 0);
    }
}
