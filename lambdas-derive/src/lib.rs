//! Derive macro for lambdas memoization keys.
//!
//! # Available Derive Macros
//!
//! - [`CacheKey`]: Implements `lambdas::memoize::CacheKey` so a type can be
//!   an argument of a memoized function
//!
//! # Example
//!
//! ```rust,ignore
//! use lambdas::memoize::CacheKey;
//!
//! #[derive(CacheKey)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! assert_eq!(
//!     Point { x: 1.0, y: 2.0 }.to_key(),
//!     (1.0_f64.to_bits(), 2.0_f64.to_bits()),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod cache_key;

use proc_macro::TokenStream;

/// Derive macro implementing `CacheKey`.
///
/// # Modes
///
/// - **Field-wise** (default for structs): the key is the tuple of the
///   fields' keys, in declaration order. Every field type must implement
///   `CacheKey`, which lets structs holding `f32`/`f64` be memoization
///   arguments. At most 12 fields may take part in the key.
/// - **By value** (`#[cache_key(by_value)]`, default for enums): the key is
///   a clone of the value itself; the type must be `Clone + Eq + Hash`.
///
/// # Field Attributes
///
/// - `#[cache_key(skip)]`: leaves the field out of the key. Values that
///   differ only in skipped fields share one cache entry.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::lambdas::memoize::CacheKey for Point {
///     type Key = (
///         <f64 as ::lambdas::memoize::CacheKey>::Key,
///         <f64 as ::lambdas::memoize::CacheKey>::Key,
///     );
///
///     fn to_key(&self) -> Self::Key {
///         (
///             ::lambdas::memoize::CacheKey::to_key(&self.x),
///             ::lambdas::memoize::CacheKey::to_key(&self.y),
///         )
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use lambdas::memoize::CacheKey;
///
/// #[derive(Clone, PartialEq, Eq, Hash, CacheKey)]
/// enum Unit {
///     Meters,
///     Feet,
/// }
///
/// #[derive(CacheKey)]
/// struct Measurement {
///     value: f64,
///     unit: Unit,
///     #[cache_key(skip)]
///     label: String,
/// }
/// ```
#[proc_macro_derive(CacheKey, attributes(cache_key))]
pub fn derive_cache_key(input: TokenStream) -> TokenStream {
    cache_key::derive_cache_key_impl(input)
}
