//! Concurrent interning cache for immutable coordinate values

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, trace};

use crate::coordinates::{CartesianCoordinate, SphericCoordinate};

/// A value that can be deduplicated by an [`InstanceCache`]
///
/// Two values with the same key are interchangeable, so the cache keeps only
/// the first one it sees.
pub trait Canonical: fmt::Debug + Send + Sync + 'static {
    type Key: Eq + Hash + Send + Sync + 'static;

    fn canonical_key(&self) -> Self::Key;
}

impl Canonical for CartesianCoordinate {
    type Key = [u64; 3];

    fn canonical_key(&self) -> Self::Key {
        self.key()
    }
}

impl Canonical for SphericCoordinate {
    type Key = [u64; 3];

    fn canonical_key(&self) -> Self::Key {
        self.key()
    }
}

/// Flyweight store mapping each canonical key to one shared instance
///
/// Clones share the same underlying map.
pub struct InstanceCache<C: Canonical> {
    instances: Arc<DashMap<C::Key, Arc<C>>>,
}

impl<C: Canonical> InstanceCache<C> {
    pub fn new() -> Self {
        Self {
            instances: Arc::new(DashMap::new()),
        }
    }

    /// Creates a cache pre-sized for `capacity` instances
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Returns the shared instance equal to `value`, registering it if new
    ///
    /// The lookup and the insert happen under the same shard lock, so
    /// concurrent callers interning equal values all receive the same `Arc`.
    pub fn intern(&self, value: C) -> Arc<C> {
        let key = value.canonical_key();

        if let Some(existing) = self.instances.get(&key) {
            trace!("instance cache hit for {:?}", existing.value());
            return Arc::clone(existing.value());
        }

        let entry = self.instances.entry(key).or_insert_with(|| {
            debug!("registering new instance {:?}", value);
            Arc::new(value)
        });
        Arc::clone(entry.value())
    }

    /// Returns the registered instance equal to `value`, if any
    pub fn get(&self, value: &C) -> Option<Arc<C>> {
        self.instances
            .get(&value.canonical_key())
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, value: &C) -> bool {
        self.instances.contains_key(&value.canonical_key())
    }

    /// Returns the current number of registered instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Drops every registered instance
    ///
    /// Instances already handed out stay alive through their `Arc`s but are
    /// no longer canonical.
    pub fn clear(&self) {
        self.instances.clear();
    }
}

impl<C: Canonical> Clone for InstanceCache<C> {
    fn clone(&self) -> Self {
        Self {
            instances: Arc::clone(&self.instances),
        }
    }
}

impl<C: Canonical> Default for InstanceCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Canonical> fmt::Debug for InstanceCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceCache")
            .field("len", &self.len())
            .finish()
    }
}
