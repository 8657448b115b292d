//! Instance registry for canonical coordinates
//!
//! A [`CoordinateRegistry`] owns one [`InstanceCache`] per representation
//! and is the entry point for obtaining shared coordinates. It is an ordinary
//! value: the application's composition root creates one and hands clones of
//! it to whoever needs coordinates. Clones share the same caches.
//!
//! ```rust
//! use std::sync::Arc;
//! use orthodrome::CoordinateRegistry;
//!
//! let registry = CoordinateRegistry::new();
//!
//! let a = registry.spheric_on_earth(49.58, 11.01).unwrap();
//! let b = registry.spheric_on_earth(49.58, 11.01).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! // Copy-on-write setters produce a new value; interning makes it canonical
//! let moved = registry.intern_spheric(a.with_latitude(50.0).unwrap());
//! assert_eq!(moved.latitude(), 50.0);
//! assert_eq!(a.latitude(), 49.58);
//! ```

use std::sync::Arc;

use crate::coordinates::{
    CartesianCoordinate, Coordinate, CoordinateKind, CoordinateRef, SphericCoordinate,
};
use crate::errors::Result;

pub mod cache;

pub use cache::{Canonical, InstanceCache};

/// Owner of the cartesian and spheric instance caches
#[derive(Debug, Clone, Default)]
pub struct CoordinateRegistry {
    cartesian: InstanceCache<CartesianCoordinate>,
    spheric: InstanceCache<SphericCoordinate>,
}

impl CoordinateRegistry {
    /// Create a registry with empty, unsized caches
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Canonical cartesian coordinate for (x, y, z)
    pub fn cartesian(&self, x: f64, y: f64, z: f64) -> Result<Arc<CartesianCoordinate>> {
        Ok(self.intern_cartesian(CartesianCoordinate::new(x, y, z)?))
    }

    /// Canonical spheric coordinate for (latitude, longitude, radius)
    pub fn spheric(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Arc<SphericCoordinate>> {
        Ok(self.intern_spheric(SphericCoordinate::new(latitude, longitude, radius)?))
    }

    /// Canonical spheric coordinate on the Earth's surface
    pub fn spheric_on_earth(&self, latitude: f64, longitude: f64) -> Result<Arc<SphericCoordinate>> {
        Ok(self.intern_spheric(SphericCoordinate::on_earth(latitude, longitude)?))
    }

    pub fn intern_cartesian(&self, value: CartesianCoordinate) -> Arc<CartesianCoordinate> {
        self.cartesian.intern(value)
    }

    pub fn intern_spheric(&self, value: SphericCoordinate) -> Arc<SphericCoordinate> {
        self.spheric.intern(value)
    }

    /// Canonical shared instance of any coordinate, keeping its representation
    pub fn intern(&self, coordinate: &dyn Coordinate) -> CoordinateRef {
        if let Some(spheric) = coordinate.as_spheric() {
            let shared: CoordinateRef = self.intern_spheric(*spheric);
            return shared;
        }
        let cartesian = match coordinate.as_cartesian() {
            Some(cartesian) => *cartesian,
            None => coordinate.to_cartesian(),
        };
        self.intern_cartesian(cartesian)
    }

    /// Canonical instance of `coordinate` converted to `kind`
    ///
    /// Converting the cartesian origin to spheric form fails with
    /// [`crate::CoordinateError::DegenerateConversion`].
    pub fn intern_as(&self, coordinate: &dyn Coordinate, kind: CoordinateKind) -> Result<CoordinateRef> {
        let shared: CoordinateRef = match kind {
            CoordinateKind::Cartesian => self.intern_cartesian(coordinate.to_cartesian()),
            CoordinateKind::Spheric => self.intern_spheric(coordinate.to_spheric()?),
        };
        Ok(shared)
    }

    pub fn cartesian_cache(&self) -> &InstanceCache<CartesianCoordinate> {
        &self.cartesian
    }

    pub fn spheric_cache(&self) -> &InstanceCache<SphericCoordinate> {
        &self.spheric
    }

    /// Returns registry statistics
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            cartesian_instances: self.cartesian.len(),
            spheric_instances: self.spheric.len(),
        }
    }

    /// Clears both caches
    pub fn clear(&self) {
        self.cartesian.clear();
        self.spheric.clear();
    }
}

/// Builder for [`CoordinateRegistry`]
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    cartesian_capacity: usize,
    spheric_capacity: usize,
}

impl RegistryBuilder {
    /// Pre-size the cartesian cache
    pub fn with_cartesian_capacity(mut self, capacity: usize) -> Self {
        self.cartesian_capacity = capacity;
        self
    }

    /// Pre-size the spheric cache
    pub fn with_spheric_capacity(mut self, capacity: usize) -> Self {
        self.spheric_capacity = capacity;
        self
    }

    pub fn build(self) -> CoordinateRegistry {
        CoordinateRegistry {
            cartesian: InstanceCache::with_capacity(self.cartesian_capacity),
            spheric: InstanceCache::with_capacity(self.spheric_capacity),
        }
    }
}

/// Registry statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of canonical cartesian instances
    pub cartesian_instances: usize,
    /// Number of canonical spheric instances
    pub spheric_instances: usize,
}
