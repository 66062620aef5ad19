//! Combinators for two-argument functions.

use std::sync::Arc;

use super::unary::BoxedFunction1;

/// A boxed, thread-safe two-argument function.
pub type BoxedFunction2<A, B, R> = Box<dyn Fn(A, B) -> R + Send + Sync>;

/// A function of two arguments.
///
/// # Examples
///
/// ```rust
/// use lambdas::function::Function2;
///
/// let subtract = |minuend: i64, subtrahend: i64| minuend - subtrahend;
///
/// let swapped = subtract.reversed();
/// assert_eq!(swapped(3, 10), 7);
///
/// let from_ten = subtract.partial(10);
/// assert_eq!(from_ten(4), 6);
///
/// let curried = subtract.curried();
/// assert_eq!(curried(10)(1), 9);
/// ```
pub trait Function2<A, B, R> {
    /// Calls the function.
    fn apply(&self, first: A, second: B) -> R;

    /// Pre-composes one function per argument:
    /// the result computes `self(before_first(x), before_second(y))`.
    fn compose<V, W, G, H>(self, before_first: G, before_second: H) -> impl Fn(V, W) -> R
    where
        Self: Sized,
        G: Fn(V) -> A,
        H: Fn(W) -> B,
    {
        move |first, second| self.apply(before_first(first), before_second(second))
    }

    /// Post-composes `after`.
    fn and_then<S, G>(self, after: G) -> impl Fn(A, B) -> S
    where
        Self: Sized,
        G: Fn(R) -> S,
    {
        move |first, second| after(self.apply(first, second))
    }

    /// Turns the function into a consumer that discards its result.
    fn consume(self) -> impl Fn(A, B)
    where
        Self: Sized,
    {
        move |first, second| {
            let _ = self.apply(first, second);
        }
    }

    /// Swaps the argument order.
    ///
    /// Reversing twice gives back the original behaviour.
    fn reversed(self) -> impl Fn(B, A) -> R
    where
        Self: Sized,
    {
        move |second, first| self.apply(first, second)
    }

    /// Fixes the first argument.
    fn partial(self, first: A) -> impl Fn(B) -> R
    where
        Self: Sized,
        A: Clone,
    {
        move |second| self.apply(first.clone(), second)
    }

    /// Converts into a chain of one-argument functions.
    ///
    /// Each intermediate function shares `self`, so the curried form can be
    /// applied to many first arguments.
    fn curried(self) -> impl Fn(A) -> BoxedFunction1<B, R>
    where
        Self: Sized + Send + Sync + 'static,
        A: Clone + Send + Sync + 'static,
        B: 'static,
        R: 'static,
    {
        let function = Arc::new(self);
        move |first: A| {
            let function = Arc::clone(&function);
            let applied: BoxedFunction1<B, R> =
                Box::new(move |second: B| function.apply(first.clone(), second));
            applied
        }
    }

    /// Erases the concrete type into a [`BoxedFunction2`].
    fn boxed(self) -> BoxedFunction2<A, B, R>
    where
        Self: Sized + Send + Sync + 'static,
        A: 'static,
        B: 'static,
        R: 'static,
    {
        Box::new(move |first, second| self.apply(first, second))
    }
}

impl<F, A, B, R> Function2<A, B, R> for F
where
    F: Fn(A, B) -> R,
{
    #[inline]
    fn apply(&self, first: A, second: B) -> R {
        self(first, second)
    }
}
