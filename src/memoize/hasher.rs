//! Hasher selection for memo caches.
//!
//! The default hasher of every memo cache is chosen at compile time:
//!
//! - feature `fxhash`: [`rustc_hash::FxBuildHasher`]
//! - feature `ahash` (without `fxhash`): [`ahash::RandomState`]
//! - otherwise: [`std::collections::hash_map::RandomState`]
//!
//! Individual caches can still pick their own hasher through
//! [`Memoized::with_hasher`](super::Memoized::with_hasher).

#[cfg(feature = "fxhash")]
/// Hasher used by memo caches unless another one is supplied.
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Hasher used by memo caches unless another one is supplied.
pub type DefaultBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Hasher used by memo caches unless another one is supplied.
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Name of the active default hasher, for diagnostics.
pub const DEFAULT_HASHER_NAME: &str = if cfg!(feature = "fxhash") {
    "fxhash"
} else if cfg!(feature = "ahash") {
    "ahash"
} else {
    "siphash"
};
