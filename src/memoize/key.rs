//! Cache keys for memoized arguments.
//!
//! A memoized call is identified by the tuple of its arguments. Arguments
//! are turned into keys through [`CacheKey`]:
//!
//! - Integer kinds, `bool`, `char`, `()` and `String` are their own key.
//! - `f32`/`f64` are keyed by bit pattern with every NaN folded into one
//!   canonical NaN. `NaN` therefore hits the entry of a previous `NaN`
//!   call, while `0.0` and `-0.0` stay distinct keys.
//! - References, `Box`, `Rc` and `Arc` use the key of what they point to,
//!   so `&str` and `String` arguments produce the same key.
//! - `Option`, `Vec`, slices, arrays and tuples compose the keys of their
//!   elements.
//!
//! User types opt in with [`cache_key_by_value!`](crate::cache_key_by_value)
//! when they are already `Clone + Eq + Hash`, or with `#[derive(CacheKey)]`
//! (feature `derive`), which also works for structs holding floats.
//!
//! # Examples
//!
//! ```rust
//! use lambdas::memoize::CacheKey;
//!
//! assert_eq!(3_i32.to_key(), 3);
//! assert_eq!("abc".to_key(), String::from("abc"));
//! assert_eq!(f64::NAN.to_key(), (-f64::NAN).to_key());
//! assert_ne!(0.0_f64.to_key(), (-0.0_f64).to_key());
//! assert_eq!((1, 'x', true).to_key(), (1, 'x', true));
//! ```

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Conversion of an argument into a hashable, comparable cache key.
///
/// Two arguments are treated as the same memoization input exactly when
/// their keys compare equal.
pub trait CacheKey {
    /// The owned key stored in the memo cache.
    type Key: Clone + Eq + Hash;

    /// Builds the key for this value.
    fn to_key(&self) -> Self::Key;
}

/// Implements [`CacheKey`] for types that are their own key.
///
/// The type must be `Clone + Eq + Hash`; the key is a clone of the value.
///
/// # Examples
///
/// ```rust
/// use lambdas::cache_key_by_value;
/// use lambdas::memoize::CacheKey;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// cache_key_by_value!(Color);
///
/// assert_eq!(Color::Red.to_key(), Color::Red);
/// assert_ne!(Color::Red.to_key(), Color::Green);
/// ```
#[macro_export]
macro_rules! cache_key_by_value {
    ($($type:ty),+ $(,)?) => {
        $(
            impl $crate::memoize::CacheKey for $type {
                type Key = $type;

                #[inline]
                fn to_key(&self) -> Self::Key {
                    ::std::clone::Clone::clone(self)
                }
            }
        )+
    };
}

cache_key_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
);

impl CacheKey for f32 {
    type Key = u32;

    #[inline]
    fn to_key(&self) -> u32 {
        if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl CacheKey for f64 {
    type Key = u64;

    #[inline]
    fn to_key(&self) -> u64 {
        if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl CacheKey for str {
    type Key = String;

    #[inline]
    fn to_key(&self) -> String {
        self.to_owned()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
    type Key = T::Key;

    #[inline]
    fn to_key(&self) -> T::Key {
        (**self).to_key()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for Box<T> {
    type Key = T::Key;

    #[inline]
    fn to_key(&self) -> T::Key {
        (**self).to_key()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for Rc<T> {
    type Key = T::Key;

    #[inline]
    fn to_key(&self) -> T::Key {
        (**self).to_key()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for Arc<T> {
    type Key = T::Key;

    #[inline]
    fn to_key(&self) -> T::Key {
        (**self).to_key()
    }
}

impl<T: CacheKey> CacheKey for Option<T> {
    type Key = Option<T::Key>;

    #[inline]
    fn to_key(&self) -> Self::Key {
        self.as_ref().map(CacheKey::to_key)
    }
}

impl<T: CacheKey> CacheKey for [T] {
    type Key = Vec<T::Key>;

    fn to_key(&self) -> Self::Key {
        self.iter().map(CacheKey::to_key).collect()
    }
}

impl<T: CacheKey> CacheKey for Vec<T> {
    type Key = Vec<T::Key>;

    #[inline]
    fn to_key(&self) -> Self::Key {
        self.as_slice().to_key()
    }
}

impl<T: CacheKey, const N: usize> CacheKey for [T; N] {
    type Key = [T::Key; N];

    fn to_key(&self) -> Self::Key {
        self.each_ref().map(CacheKey::to_key)
    }
}

macro_rules! cache_key_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: CacheKey),+> CacheKey for ($($name,)+) {
            type Key = ($($name::Key,)+);

            #[inline]
            #[allow(non_snake_case)]
            fn to_key(&self) -> Self::Key {
                let ($($name,)+) = self;
                ($($name.to_key(),)+)
            }
        }
    };
}

cache_key_for_tuple!(A);
cache_key_for_tuple!(A, B);
cache_key_for_tuple!(A, B, C);
cache_key_for_tuple!(A, B, C, D);
cache_key_for_tuple!(A, B, C, D, E);
cache_key_for_tuple!(A, B, C, D, E, G);
