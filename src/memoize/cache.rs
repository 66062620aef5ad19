//! The per-key memo cache.
//!
//! [`MemoCache`] maps keys to [`FillOnce`] slots. The map lock is held only
//! to find or create a slot; computing a value happens under that slot's own
//! gate, so different keys are computed in parallel while callers of the same
//! missing key wait for one another.
//!
//! Only successful computations stay in the map. The slot of a failed or
//! panicking computation is removed once no other caller is waiting on it;
//! stored values are never evicted or replaced, and the whole cache is
//! dropped together with its owner.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::hasher::DefaultBuildHasher;
use super::slot::FillOnce;

/// A concurrent, unbounded, append-only memo table.
///
/// # Examples
///
/// ```rust
/// use lambdas::memoize::MemoCache;
///
/// let cache: MemoCache<&str, usize> = MemoCache::new();
///
/// assert_eq!(cache.get_or_insert_with("four", || 4), 4);
/// // Stored values win over later computations for the same key.
/// assert_eq!(cache.get_or_insert_with("four", || 40), 4);
///
/// let failed: Result<usize, &str> = cache.get_or_try_insert_with("five", || Err("boom"));
/// assert_eq!(failed, Err("boom"));
/// assert!(!cache.contains_key("five"));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct MemoCache<K, V, S = DefaultBuildHasher> {
    slots: RwLock<HashMap<K, Arc<FillOnce<V>>, S>>,
    stored: AtomicUsize,
}

impl<K, V, S: Default> MemoCache<K, V, S> {
    /// Creates an empty cache using the default hasher.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::with_hasher(S::default())),
            stored: AtomicUsize::new(0),
        }
    }

    /// Creates an empty cache with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::with_capacity_and_hasher(capacity, S::default())),
            stored: AtomicUsize::new(0),
        }
    }
}

impl<K, V, S> MemoCache<K, V, S> {
    /// Creates an empty cache that hashes keys with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            slots: RwLock::new(HashMap::with_hasher(hasher)),
            stored: AtomicUsize::new(0),
        }
    }

    /// Creates an empty cache with room for `capacity` keys, hashed with `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
            stored: AtomicUsize::new(0),
        }
    }

    /// Number of stored values. Keys whose computation failed or is still
    /// running are not counted.
    pub fn len(&self) -> usize {
        self.stored.load(Ordering::Acquire)
    }

    /// Returns `true` if no value has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> MemoCache<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns a clone of the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.slots
            .read()
            .get(key)
            .and_then(|slot| slot.get().cloned())
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots
            .read()
            .get(key)
            .is_some_and(|slot| slot.is_filled())
    }

    /// Returns the value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs at most once per key across all successful calls.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        K: Clone,
        V: Clone,
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with(key, || Ok::<V, Infallible>(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the value for `key`, computing and storing it on a miss.
    ///
    /// A failed computation is handed back to the caller and nothing is
    /// stored, so the next call for the same key computes again.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `compute`, unchanged.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        K: Clone,
        V: Clone,
        F: FnOnce() -> Result<V, E>,
    {
        let existing = match self.slots.read().get(&key) {
            Some(slot) => match slot.get() {
                Some(value) => return Ok(value.clone()),
                None => Some(Arc::clone(slot)),
            },
            None => None,
        };

        let slot = existing.unwrap_or_else(|| {
            Arc::clone(self.slots.write().entry(key.clone()).or_default())
        });
        let pending = PendingFill {
            cache: self,
            key,
            slot: Some(slot),
        };

        let value = pending.slot().get_or_try_fill(|| {
            tracing::trace!("memo cache miss; computing value");
            let outcome = compute();
            match &outcome {
                Ok(_) => {
                    self.stored.fetch_add(1, Ordering::Release);
                    tracing::trace!("memo cache stored computed value");
                }
                Err(_) => tracing::debug!("memoized computation failed; result not cached"),
            }
            outcome
        })?;
        Ok(value.clone())
    }
}

/// A caller's claim on a slot while it may be filling it.
///
/// Dropping the claim of a slot that is still empty, whether after an error
/// or during a panic, removes the slot from the map once no other caller
/// holds it.
struct PendingFill<'a, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    cache: &'a MemoCache<K, V, S>,
    key: K,
    slot: Option<Arc<FillOnce<V>>>,
}

impl<K, V, S> PendingFill<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn slot(&self) -> &FillOnce<V> {
        match &self.slot {
            Some(slot) => slot,
            None => unreachable!("slot is only taken on drop"),
        }
    }
}

impl<K, V, S> Drop for PendingFill<'_, K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn drop(&mut self) {
        let Some(slot) = self.slot.take() else {
            return;
        };
        if slot.is_filled() {
            return;
        }

        // Claims are created and released under the map lock, so the map's
        // own reference is the last one exactly when nobody else waits.
        let mut slots = self.cache.slots.write();
        drop(slot);
        let abandoned = slots
            .get(&self.key)
            .is_some_and(|stored| Arc::strong_count(stored) == 1 && !stored.is_filled());
        if abandoned {
            slots.remove(&self.key);
            tracing::trace!("memo cache dropped empty slot");
        }
    }
}

impl<K, V, S: Default> Default for MemoCache<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for MemoCache<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
