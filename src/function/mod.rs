//! Function traits and their combinators.
//!
//! Every closure or function item of one, two or three arguments is a
//! [`Function1`], [`Function2`] or [`Function3`]; the memoized wrappers from
//! [`crate::memoize`] implement the same traits, so a memoized function can
//! be used wherever the original was.
//!
//! # Combinators
//!
//! | Combinator  | Result                                            |
//! |-------------|---------------------------------------------------|
//! | `compose`   | arguments are transformed before the call         |
//! | `and_then`  | the result is transformed after the call          |
//! | `consume`   | the result is discarded                           |
//! | `reversed`  | argument order is reversed (arity 2 and 3)        |
//! | `partial`   | the first argument is fixed                       |
//! | `curried`   | one-argument chain (arity 2 and 3)                |
//! | `boxed`     | `Box<dyn Fn .. + Send + Sync>` equivalent         |
//!
//! Functions returning `Result` additionally get the [`TryFunction1`],
//! [`TryFunction2`] and [`TryFunction3`] combinators.
//!
//! # Laws
//!
//! - `f.reversed().reversed()` behaves like `f`
//! - `f.compose(identity)` and `f.and_then(identity)` behave like `f`
//! - `f.and_then(g).and_then(h)` behaves like `f.and_then(|x| h(g(x)))`
//!
//! # Examples
//!
//! ```rust
//! use lambdas::prelude::*;
//!
//! let area = |width: u32, height: u32| width * height;
//! let square = area.compose(|side: u32| side, |side: u32| side);
//! assert_eq!(square(3, 3), 9);
//!
//! let boxed: BoxedFunction2<u32, u32, u32> = area.boxed();
//! assert_eq!(boxed(2, 5), 10);
//! ```

mod binary;
mod fallible;
mod ternary;
mod unary;

pub use binary::{BoxedFunction2, Function2};
pub use fallible::{TryFunction1, TryFunction2, TryFunction3};
pub use ternary::{BoxedFunction3, Curried3, Function3};
pub use unary::{BoxedFunction1, Function1, identity};
