//! Combinators for one-argument functions.

/// A boxed, thread-safe one-argument function.
///
/// This is the generic equivalent every [`Function1`] can be turned into
/// with [`Function1::boxed`].
pub type BoxedFunction1<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

/// A function of one argument.
///
/// Implemented for every `Fn(A) -> R` and for memoized wrappers, so both can
/// be composed and converted in the same way.
///
/// # Examples
///
/// ```rust
/// use lambdas::function::Function1;
///
/// let double = |value: i32| value * 2;
/// let describe = double.and_then(|value: i32| format!("<{value}>"));
/// assert_eq!(describe(4), "<8>");
///
/// let length_doubled = (|value: i32| value * 2).compose(|text: &str| text.len() as i32);
/// assert_eq!(length_doubled("abc"), 6);
/// ```
pub trait Function1<A, R> {
    /// Calls the function.
    fn apply(&self, argument: A) -> R;

    /// Pre-composes `before`: the result computes `self(before(value))`.
    fn compose<V, G>(self, before: G) -> impl Fn(V) -> R
    where
        Self: Sized,
        G: Fn(V) -> A,
    {
        move |value| self.apply(before(value))
    }

    /// Post-composes `after`: the result computes `after(self(argument))`.
    fn and_then<S, G>(self, after: G) -> impl Fn(A) -> S
    where
        Self: Sized,
        G: Fn(R) -> S,
    {
        move |argument| after(self.apply(argument))
    }

    /// Turns the function into a consumer that discards its result.
    fn consume(self) -> impl Fn(A)
    where
        Self: Sized,
    {
        move |argument| {
            let _ = self.apply(argument);
        }
    }

    /// Fixes the argument, producing a thunk.
    fn partial(self, argument: A) -> impl Fn() -> R
    where
        Self: Sized,
        A: Clone,
    {
        move || self.apply(argument.clone())
    }

    /// Erases the concrete type into a [`BoxedFunction1`].
    fn boxed(self) -> BoxedFunction1<A, R>
    where
        Self: Sized + Send + Sync + 'static,
        A: 'static,
        R: 'static,
    {
        Box::new(move |argument| self.apply(argument))
    }
}

/// Returns its argument unchanged.
///
/// The unit of `compose` and `and_then`.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

impl<F, A, R> Function1<A, R> for F
where
    F: Fn(A) -> R,
{
    #[inline]
    fn apply(&self, argument: A) -> R {
        self(argument)
    }
}
