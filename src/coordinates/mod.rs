//! # Coordinate Module
//!
//! Two representations of a point on or around a sphere, unified behind the
//! [`Coordinate`] trait:
//!
//! - [`CartesianCoordinate`]: (x, y, z) in Euclidean space
//! - [`SphericCoordinate`]: (latitude, longitude, radius) in degrees and
//!   distance units
//!
//! Both are immutable `Copy` values. Conversions live in [`conversion`] and
//! every distance query goes through the orthodromic formula in [`distance`],
//! whichever representation the caller holds.
//!
//! ## Examples
//!
//! ```rust
//! use orthodrome::coordinates::{Coordinate, SphericCoordinate};
//!
//! let erlangen = SphericCoordinate::on_earth(49.58, 11.01).unwrap();
//! let houston = SphericCoordinate::on_earth(29.76, -95.36).unwrap();
//!
//! let km = erlangen.distance_to(&houston).unwrap();
//! assert!((km - 8599.0).abs() < 0.5);
//!
//! // Same point, other representation
//! let houston_xyz = houston.to_cartesian();
//! let km_xyz = erlangen.distance_to(&houston_xyz).unwrap();
//! assert!((km - km_xyz).abs() < 1e-6);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::errors::Result;

pub mod cartesian;
pub mod conversion;
pub mod distance;
pub mod spheric;
pub mod validation;

pub use cartesian::CartesianCoordinate;
pub use spheric::SphericCoordinate;

/// A shared, immutable coordinate of either representation
///
/// This is what registries hand out and what a [`crate::Location`] stores.
pub type CoordinateRef = Arc<dyn Coordinate>;

/// The concrete representation behind a [`Coordinate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    Cartesian,
    Spheric,
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateKind::Cartesian => write!(f, "cartesian"),
            CoordinateKind::Spheric => write!(f, "spheric"),
        }
    }
}

/// Capabilities shared by every coordinate representation
pub trait Coordinate: fmt::Debug + fmt::Display + Send + Sync {
    /// Which representation this is
    fn kind(&self) -> CoordinateKind;

    /// Converts to cartesian form
    fn to_cartesian(&self) -> CartesianCoordinate;

    /// Converts to spheric form
    ///
    /// Fails with [`crate::CoordinateError::DegenerateConversion`] for the
    /// cartesian origin.
    fn to_spheric(&self) -> Result<SphericCoordinate>;

    /// Distance from the sphere's center
    fn radius(&self) -> f64;

    /// Latitude in degrees
    fn latitude(&self) -> Result<f64> {
        Ok(self.to_spheric()?.latitude())
    }

    /// Longitude in degrees
    fn longitude(&self) -> Result<f64> {
        Ok(self.to_spheric()?.longitude())
    }

    /// Downcast to the cartesian representation, if that is what this is
    fn as_cartesian(&self) -> Option<&CartesianCoordinate> {
        None
    }

    /// Downcast to the spheric representation, if that is what this is
    fn as_spheric(&self) -> Option<&SphericCoordinate> {
        None
    }

    /// Structural equality within one representation
    ///
    /// Operands of different representations are never equal; convert one
    /// of them first to compare across representations.
    fn is_equal(&self, other: &dyn Coordinate) -> bool;

    /// Great-circle distance to `other`, in the unit of the shared radius
    ///
    /// Both operands are viewed in spheric form, so the result has the same
    /// physical meaning for either representation. Fails if the radii differ
    /// or either operand is the cartesian origin.
    fn distance_to(&self, other: &dyn Coordinate) -> Result<f64> {
        let this = self.to_spheric()?;
        let other = other.to_spheric()?;
        distance::orthodromic_distance(&this, &other)
    }
}
