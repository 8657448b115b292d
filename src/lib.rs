//! Orthodrome: coordinate value objects for places on a sphere
//!
//! This crate provides cartesian and spheric coordinates behind one
//! [`Coordinate`] trait, conversion between the two, great-circle
//! (orthodromic) distances, and a [`CoordinateRegistry`] that deduplicates
//! equal coordinates into shared, immutable instances.
//!
//! # Example
//!
//! ```
//! use orthodrome::{CoordinateRegistry, Location};
//!
//! let registry = CoordinateRegistry::new();
//!
//! let erlangen = Location::new("Erlangen", registry.spheric_on_earth(49.58, 11.01)?);
//! let houston = Location::new("Houston", registry.spheric_on_earth(29.76, -95.36)?);
//!
//! let km = erlangen.distance_to(&houston)?;
//! assert!((km - 8599.0).abs() < 0.5);
//! # Ok::<(), orthodrome::CoordinateError>(())
//! ```

pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod location;
pub mod registry;

// Re-export commonly used types
pub use constants::EARTH_RADIUS;
pub use coordinates::{
    CartesianCoordinate, Coordinate, CoordinateKind, CoordinateRef, SphericCoordinate,
};
pub use errors::{CoordinateError, Result};
pub use location::Location;
pub use registry::{CoordinateRegistry, RegistryBuilder, RegistryStats};
