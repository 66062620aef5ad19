//! Combinators for functions that may fail.
//!
//! A fallible function is any function returning `Result<T, E>`. It already
//! gets every combinator of [`Function1`], [`Function2`] and [`Function3`];
//! the traits here add the ones that look inside the `Result`.
//!
//! # Examples
//!
//! ```rust
//! use lambdas::function::TryFunction1;
//!
//! let parse = |text: &'static str| text.parse::<i32>();
//!
//! let doubled = parse.map_ok(|value| value * 2);
//! assert_eq!(doubled("21"), Ok(42));
//! assert!(doubled("x").is_err());
//!
//! let lenient = parse.or_return(0);
//! assert_eq!(lenient("x"), 0);
//! ```

use super::{Function1, Function2, Function3};

/// A one-argument function returning `Result<T, E>`.
pub trait TryFunction1<A, T, E>: Function1<A, Result<T, E>> {
    /// Maps the success value.
    fn map_ok<U, G>(self, after: G) -> impl Fn(A) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> U,
    {
        move |argument| self.apply(argument).map(&after)
    }

    /// Chains a fallible step that shares the error type.
    fn and_then_try<U, G>(self, after: G) -> impl Fn(A) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> Result<U, E>,
    {
        move |argument| self.apply(argument).and_then(&after)
    }

    /// Replaces a failure with `recovery(error, argument)`.
    ///
    /// The argument is cloned before the first attempt so it can be handed
    /// to the recovery function.
    fn recover<G>(self, recovery: G) -> impl Fn(A) -> T
    where
        Self: Sized,
        A: Clone,
        G: Fn(E, A) -> T,
    {
        move |argument: A| {
            self.apply(argument.clone())
                .unwrap_or_else(|error| recovery(error, argument))
        }
    }

    /// Replaces a failure with `default`.
    fn or_return(self, default: T) -> impl Fn(A) -> T
    where
        Self: Sized,
        T: Clone,
    {
        move |argument| self.apply(argument).unwrap_or_else(|_| default.clone())
    }

    /// Discards the error, returning `None` on failure.
    fn ok(self) -> impl Fn(A) -> Option<T>
    where
        Self: Sized,
    {
        move |argument| self.apply(argument).ok()
    }
}

impl<F, A, T, E> TryFunction1<A, T, E> for F where F: Fn(A) -> Result<T, E> {}

/// A two-argument function returning `Result<T, E>`.
pub trait TryFunction2<A, B, T, E>: Function2<A, B, Result<T, E>> {
    /// Maps the success value.
    fn map_ok<U, G>(self, after: G) -> impl Fn(A, B) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> U,
    {
        move |first, second| self.apply(first, second).map(&after)
    }

    /// Chains a fallible step that shares the error type.
    fn and_then_try<U, G>(self, after: G) -> impl Fn(A, B) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> Result<U, E>,
    {
        move |first, second| self.apply(first, second).and_then(&after)
    }

    /// Replaces a failure with `recovery(error, first, second)`.
    fn recover<G>(self, recovery: G) -> impl Fn(A, B) -> T
    where
        Self: Sized,
        A: Clone,
        B: Clone,
        G: Fn(E, A, B) -> T,
    {
        move |first: A, second: B| {
            self.apply(first.clone(), second.clone())
                .unwrap_or_else(|error| recovery(error, first, second))
        }
    }

    /// Replaces a failure with `default`.
    fn or_return(self, default: T) -> impl Fn(A, B) -> T
    where
        Self: Sized,
        T: Clone,
    {
        move |first, second| {
            self.apply(first, second)
                .unwrap_or_else(|_| default.clone())
        }
    }

    /// Discards the error, returning `None` on failure.
    fn ok(self) -> impl Fn(A, B) -> Option<T>
    where
        Self: Sized,
    {
        move |first, second| self.apply(first, second).ok()
    }
}

impl<F, A, B, T, E> TryFunction2<A, B, T, E> for F where F: Fn(A, B) -> Result<T, E> {}

/// A three-argument function returning `Result<T, E>`.
pub trait TryFunction3<A, B, C, T, E>: Function3<A, B, C, Result<T, E>> {
    /// Maps the success value.
    fn map_ok<U, G>(self, after: G) -> impl Fn(A, B, C) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> U,
    {
        move |first, second, third| self.apply(first, second, third).map(&after)
    }

    /// Chains a fallible step that shares the error type.
    fn and_then_try<U, G>(self, after: G) -> impl Fn(A, B, C) -> Result<U, E>
    where
        Self: Sized,
        G: Fn(T) -> Result<U, E>,
    {
        move |first, second, third| self.apply(first, second, third).and_then(&after)
    }

    /// Replaces a failure with `recovery(error, first, second, third)`.
    fn recover<G>(self, recovery: G) -> impl Fn(A, B, C) -> T
    where
        Self: Sized,
        A: Clone,
        B: Clone,
        C: Clone,
        G: Fn(E, A, B, C) -> T,
    {
        move |first: A, second: B, third: C| {
            self.apply(first.clone(), second.clone(), third.clone())
                .unwrap_or_else(|error| recovery(error, first, second, third))
        }
    }

    /// Replaces a failure with `default`.
    fn or_return(self, default: T) -> impl Fn(A, B, C) -> T
    where
        Self: Sized,
        T: Clone,
    {
        move |first, second, third| {
            self.apply(first, second, third)
                .unwrap_or_else(|_| default.clone())
        }
    }

    /// Discards the error, returning `None` on failure.
    fn ok(self) -> impl Fn(A, B, C) -> Option<T>
    where
        Self: Sized,
    {
        move |first, second, third| self.apply(first, second, third).ok()
    }
}

impl<F, A, B, C, T, E> TryFunction3<A, B, C, T, E> for F where F: Fn(A, B, C) -> Result<T, E> {}
