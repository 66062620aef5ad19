//! Combinators for three-argument functions.

use std::sync::Arc;

use super::unary::BoxedFunction1;

/// A boxed, thread-safe three-argument function.
pub type BoxedFunction3<A, B, C, R> = Box<dyn Fn(A, B, C) -> R + Send + Sync>;

/// Curried form of a three-argument function.
pub type Curried3<B, C, R> = BoxedFunction1<B, BoxedFunction1<C, R>>;

/// A function of three arguments.
///
/// # Examples
///
/// ```rust
/// use lambdas::function::Function3;
///
/// let clamp = |low: i32, high: i32, value: i32| value.max(low).min(high);
///
/// let positive_byte = clamp.partial(0);
/// assert_eq!(positive_byte(255, 300), 255);
///
/// let backwards = clamp.reversed();
/// assert_eq!(backwards(-4, 10, 0), 0);
///
/// assert_eq!(clamp.curried()(1)(9)(12), 9);
/// ```
pub trait Function3<A, B, C, R> {
    /// Calls the function.
    fn apply(&self, first: A, second: B, third: C) -> R;

    /// Pre-composes one function per argument.
    fn compose<U, V, W, G, H, K>(
        self,
        before_first: G,
        before_second: H,
        before_third: K,
    ) -> impl Fn(U, V, W) -> R
    where
        Self: Sized,
        G: Fn(U) -> A,
        H: Fn(V) -> B,
        K: Fn(W) -> C,
    {
        move |first, second, third| {
            self.apply(
                before_first(first),
                before_second(second),
                before_third(third),
            )
        }
    }

    /// Post-composes `after`.
    fn and_then<S, G>(self, after: G) -> impl Fn(A, B, C) -> S
    where
        Self: Sized,
        G: Fn(R) -> S,
    {
        move |first, second, third| after(self.apply(first, second, third))
    }

    /// Turns the function into a consumer that discards its result.
    fn consume(self) -> impl Fn(A, B, C)
    where
        Self: Sized,
    {
        move |first, second, third| {
            let _ = self.apply(first, second, third);
        }
    }

    /// Reverses the argument order: `reversed(c, b, a) == self(a, b, c)`.
    fn reversed(self) -> impl Fn(C, B, A) -> R
    where
        Self: Sized,
    {
        move |third, second, first| self.apply(first, second, third)
    }

    /// Fixes the first argument.
    fn partial(self, first: A) -> impl Fn(B, C) -> R
    where
        Self: Sized,
        A: Clone,
    {
        move |second, third| self.apply(first.clone(), second, third)
    }

    /// Converts into a chain of one-argument functions.
    fn curried(self) -> impl Fn(A) -> Curried3<B, C, R>
    where
        Self: Sized + Send + Sync + 'static,
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: 'static,
        R: 'static,
    {
        let function = Arc::new(self);
        move |first: A| {
            let function = Arc::clone(&function);
            let applied: Curried3<B, C, R> = Box::new(move |second: B| {
                let function = Arc::clone(&function);
                let first = first.clone();
                let applied: BoxedFunction1<C, R> = Box::new(move |third: C| {
                    function.apply(first.clone(), second.clone(), third)
                });
                applied
            });
            applied
        }
    }

    /// Erases the concrete type into a [`BoxedFunction3`].
    fn boxed(self) -> BoxedFunction3<A, B, C, R>
    where
        Self: Sized + Send + Sync + 'static,
        A: 'static,
        B: 'static,
        C: 'static,
        R: 'static,
    {
        Box::new(move |first, second, third| self.apply(first, second, third))
    }
}

impl<F, A, B, C, R> Function3<A, B, C, R> for F
where
    F: Fn(A, B, C) -> R,
{
    #[inline]
    fn apply(&self, first: A, second: B, third: C) -> R {
        self(first, second, third)
    }
}
