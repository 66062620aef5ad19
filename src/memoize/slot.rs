//! A thread-safe slot that is filled at most once.
//!
//! [`FillOnce`] is the per-key primitive behind the memo cache. Unlike a
//! lazily initialized value it does not own its initializer: every caller
//! brings its own fill function, and a fill that fails leaves the slot empty
//! for the next caller to try again.
//!
//! # State Machine
//!
//! ```text
//! empty --fill succeeds--> filled
//!   ^          |
//!   +--fails---+   (Err or panic; the gate is released, nothing stored)
//! ```
//!
//! Reads of a filled slot never take the gate. Callers racing on an empty
//! slot are serialized by the gate, so at most one fill succeeds and every
//! caller observes the same value.
//!
//! # Re-entry
//!
//! Filling a slot from inside its own fill function deadlocks: the gate is
//! not re-entrant.

use std::fmt;
use std::sync::OnceLock;

use parking_lot::Mutex;

/// A slot that is written by at most one successful fill.
///
/// # Examples
///
/// ```rust
/// use lambdas::memoize::FillOnce;
///
/// let slot = FillOnce::new();
/// assert_eq!(slot.get_or_try_fill(|| Err::<i32, _>("not yet")), Err("not yet"));
/// assert!(!slot.is_filled());
///
/// assert_eq!(slot.get_or_try_fill(|| Ok::<_, &str>(7)), Ok(&7));
/// // Later fills are ignored once the slot holds a value.
/// assert_eq!(slot.get_or_try_fill(|| Ok::<_, &str>(8)), Ok(&7));
/// ```
pub struct FillOnce<T> {
    value: OnceLock<T>,
    gate: Mutex<()>,
}

impl<T> FillOnce<T> {
    /// Creates an empty slot.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: OnceLock::new(),
            gate: Mutex::new(()),
        }
    }

    /// Creates a slot that already holds `value`.
    pub fn filled(value: T) -> Self {
        Self {
            value: OnceLock::from(value),
            gate: Mutex::new(()),
        }
    }

    /// Returns the stored value, if any. Never blocks.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns `true` once a fill has succeeded.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns the stored value, running `fill` first if the slot is empty.
    ///
    /// Concurrent callers on an empty slot wait for each other; the first
    /// successful fill wins and the rest return the stored value without
    /// running their own `fill`.
    ///
    /// # Errors
    ///
    /// Returns the error of `fill` unchanged. The slot stays empty.
    pub fn get_or_try_fill<E, F>(&self, fill: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let _gate = self.gate.lock();
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let value = fill()?;
        Ok(self.value.get_or_init(move || value))
    }

    /// Consumes the slot and returns its value, if any.
    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T> Default for FillOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for FillOnce<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => formatter.debug_tuple("FillOnce").field(value).finish(),
            None => formatter.write_str("FillOnce(<empty>)"),
        }
    }
}
