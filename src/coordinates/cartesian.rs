//! # Cartesian Coordinate Module
//!
//! This module provides the (x, y, z) representation of a point in 3D
//! Euclidean space.
//!
//! ## Coordinate System Convention
//!
//! The axes follow the geographic convention used by the conversion engine:
//! - **X-axis**: Points toward latitude 0°, longitude 0°
//! - **Y-axis**: Points toward latitude 0°, longitude 90°
//! - **Z-axis**: Points toward the north pole (latitude +90°)
//!
//! ## Internal Storage
//!
//! Components are stored as three private `f64` values. The only invariant is
//! finiteness; cartesian space is unbounded. Values are immutable once built:
//! the `with_*` methods return a new coordinate instead of mutating.
//!
//! ## Distances
//!
//! [`Coordinate::distance_to`] is the great-circle distance between the two
//! points viewed in spheric form, not the straight-line distance. Use
//! [`CartesianCoordinate::chord_length`] for the latter.
//!
//! ## Examples
//!
//! ```rust
//! use orthodrome::coordinates::CartesianCoordinate;
//!
//! let point = CartesianCoordinate::new(3.0, 4.0, 0.0).unwrap();
//! assert_eq!(point.magnitude(), 5.0);
//!
//! let lifted = point.with_z(12.0).unwrap();
//! assert_eq!(lifted.magnitude(), 13.0);
//! assert_eq!(point.z(), 0.0); // unchanged
//! ```

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::conversion;
use super::validation::assert_finite;
use super::{Coordinate, CoordinateKind, SphericCoordinate};
use crate::errors::Result;

/// Three-dimensional Cartesian coordinate
///
/// # Equality
///
/// [`Coordinate::is_equal`] compares the bit patterns of all three
/// components, so `0.0` and `-0.0` differ. This matches the keys used by the
/// instance registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawCartesian")]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

/// Unvalidated wire shape, checked by `TryFrom` during deserialization
#[derive(Deserialize)]
struct RawCartesian {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<RawCartesian> for CartesianCoordinate {
    type Error = crate::CoordinateError;

    fn try_from(raw: RawCartesian) -> Result<Self> {
        CartesianCoordinate::new(raw.x, raw.y, raw.z)
    }
}

impl CartesianCoordinate {
    /// Creates a new Cartesian coordinate
    ///
    /// Fails with [`crate::CoordinateError::InvalidArgument`] if any
    /// component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orthodrome::coordinates::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(coord.x(), 1.0);
    /// assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        assert_finite("x", x)?;
        assert_finite("y", y)?;
        assert_finite("z", z)?;
        Ok(Self::from_parts(x, y, z))
    }

    /// The point (0, 0, 0)
    pub fn origin() -> Self {
        Self::from_parts(0.0, 0.0, 0.0)
    }

    /// Builds a coordinate from components already known to be finite
    pub(crate) fn from_parts(x: f64, y: f64, z: f64) -> Self {
        CartesianCoordinate { x, y, z }
    }

    /// X component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component, along the polar axis
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns a copy with `x` replaced
    pub fn with_x(&self, x: f64) -> Result<Self> {
        Self::new(x, self.y, self.z)
    }

    /// Returns a copy with `y` replaced
    pub fn with_y(&self, y: f64) -> Result<Self> {
        Self::new(self.x, y, self.z)
    }

    /// Returns a copy with `z` replaced
    pub fn with_z(&self, z: f64) -> Result<Self> {
        Self::new(self.x, self.y, z)
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// This is the radius of the sphere the point lies on.
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`, evaluated with `hypot` so that no
    /// intermediate square overflows or underflows. Only a vector whose true
    /// length exceeds `f64::MAX` yields infinity.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Straight-line (Euclidean) distance to another cartesian point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orthodrome::coordinates::CartesianCoordinate;
    ///
    /// let a = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap();
    /// let b = CartesianCoordinate::new(0.0, 1.0, 0.0).unwrap();
    /// assert!((a.chord_length(&b) - 2f64.sqrt()).abs() < 1e-15);
    /// ```
    pub fn chord_length(&self, other: &CartesianCoordinate) -> f64 {
        let delta = self.to_vector3() - other.to_vector3();
        delta.x.hypot(delta.y).hypot(delta.z)
    }

    /// Converts to spheric form
    ///
    /// Fails with [`crate::CoordinateError::DegenerateConversion`] at the
    /// origin, where latitude and longitude are undefined.
    pub fn to_spheric(&self) -> Result<SphericCoordinate> {
        conversion::cartesian_to_spheric(self)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3, rejecting non-finite components
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Self> {
        Self::new(vec.x, vec.y, vec.z)
    }

    /// Bit patterns of (x, y, z), the identity used by equality and interning
    pub(crate) fn key(&self) -> [u64; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl Default for CartesianCoordinate {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CartesianCoordinate {}

impl fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cartesian coordinate with values x: {}, y: {}, z: {}",
            self.x, self.y, self.z
        )
    }
}

impl Coordinate for CartesianCoordinate {
    fn kind(&self) -> CoordinateKind {
        CoordinateKind::Cartesian
    }

    fn to_cartesian(&self) -> CartesianCoordinate {
        *self
    }

    fn to_spheric(&self) -> Result<SphericCoordinate> {
        CartesianCoordinate::to_spheric(self)
    }

    fn radius(&self) -> f64 {
        self.magnitude()
    }

    fn as_cartesian(&self) -> Option<&CartesianCoordinate> {
        Some(self)
    }

    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        other.as_cartesian().is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS;

    #[test]
    fn test_cartesian_creation() {
        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(coord.x(), 1.0);
        assert_eq!(coord.y(), 2.0);
        assert_eq!(coord.z(), 3.0);

        let origin = CartesianCoordinate::default();
        assert_eq!(origin, CartesianCoordinate::origin());
        assert_eq!(origin.magnitude(), 0.0);
    }

    #[test]
    fn test_non_finite_components_rejected() {
        assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(CartesianCoordinate::new(0.0, f64::INFINITY, 0.0).is_err());
        assert!(CartesianCoordinate::new(0.0, 0.0, f64::NEG_INFINITY).is_err());

        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        assert!(coord.with_x(f64::NAN).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_magnitude_calculation() {
        let coord = CartesianCoordinate::new(3.0, 4.0, 0.0).unwrap();
        assert_eq!(coord.magnitude(), 5.0);

        let coord = CartesianCoordinate::new(-2.0, 3.0, 6.0).unwrap();
        assert!((coord.magnitude() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_extreme_components() {
        // Squaring these would overflow or underflow
        let huge = CartesianCoordinate::new(3e300, 4e300, 0.0).unwrap();
        assert!((huge.magnitude() / 5e300 - 1.0).abs() < 1e-15);

        let tiny = CartesianCoordinate::new(1e-170, 0.0, 0.0).unwrap();
        assert_eq!(tiny.magnitude(), 1e-170);

        let beyond = CartesianCoordinate::new(f64::MAX, f64::MAX, 0.0).unwrap();
        assert!(beyond.magnitude().is_infinite());
    }

    #[test]
    fn test_tiny_point_converts_to_spheric() {
        let tiny = CartesianCoordinate::new(1e-170, 0.0, 0.0).unwrap();
        let spheric = tiny.to_spheric().unwrap();
        assert_eq!(spheric.latitude(), 0.0);
        assert_eq!(spheric.longitude(), 0.0);
        assert_eq!(spheric.radius(), 1e-170);
    }

    #[test]
    fn test_copy_on_write_setters() {
        let original = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        let moved = original.with_x(10.0).unwrap().with_y(20.0).unwrap();

        assert_eq!(moved.x(), 10.0);
        assert_eq!(moved.y(), 20.0);
        assert_eq!(moved.z(), 3.0);
        assert_eq!(original.x(), 1.0);
        assert_eq!(original.y(), 2.0);
    }

    #[test]
    fn test_equality_is_bitwise() {
        let a = CartesianCoordinate::new(0.1 + 0.2, 0.0, 0.0).unwrap();
        let b = CartesianCoordinate::new(0.3, 0.0, 0.0).unwrap();
        assert!(!a.is_equal(&b));

        let c = CartesianCoordinate::new(0.0, 0.0, 0.0).unwrap();
        let d = CartesianCoordinate::new(-0.0, 0.0, 0.0).unwrap();
        assert!(!c.is_equal(&d));

        let e = CartesianCoordinate::new(1.5, -2.5, 3.5).unwrap();
        let f = CartesianCoordinate::new(1.5, -2.5, 3.5).unwrap();
        assert!(e.is_equal(&f));
        assert_eq!(e, f);
    }

    #[test]
    fn test_display() {
        let coord = CartesianCoordinate::new(1.0, 2.5, -3.0).unwrap();
        assert_eq!(
            coord.to_string(),
            "Cartesian coordinate with values x: 1, y: 2.5, z: -3"
        );
    }

    #[test]
    fn test_distance_is_orthodromic() {
        // Quarter of a great circle on the unit sphere
        let x_axis = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap();
        let y_axis = CartesianCoordinate::new(0.0, 1.0, 0.0).unwrap();

        let arc = x_axis.distance_to(&y_axis).unwrap();
        assert!((arc - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(arc > x_axis.chord_length(&y_axis));
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let erlangen = SphericCoordinate::on_earth(49.58, 11.01)
            .unwrap()
            .to_cartesian();
        assert_eq!(erlangen.distance_to(&erlangen).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_requires_same_radius() {
        let inner = CartesianCoordinate::new(1.0, 0.0, 0.0).unwrap();
        let outer = CartesianCoordinate::new(0.0, 2.0, 0.0).unwrap();
        assert!(inner.distance_to(&outer).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_distance_from_origin_is_degenerate() {
        let origin = CartesianCoordinate::origin();
        let other = CartesianCoordinate::new(0.0, 0.0, EARTH_RADIUS).unwrap();
        assert!(origin
            .distance_to(&other)
            .unwrap_err()
            .is_degenerate_conversion());
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
        let vec = coord.to_vector3();

        assert_eq!(vec.x, 1.0);
        assert_eq!(vec.y, 2.0);
        assert_eq!(vec.z, 3.0);

        let coord_back = CartesianCoordinate::from_vector3(vec).unwrap();
        assert_eq!(coord, coord_back);

        assert!(CartesianCoordinate::from_vector3(Vector3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_precision_preservation() {
        let precise_coord =
            CartesianCoordinate::new(0.123456789012345, 0.987654321098765, 0.555666777888999)
                .unwrap();

        assert_eq!(precise_coord.x(), 0.123456789012345);
        assert_eq!(precise_coord.y(), 0.987654321098765);
        assert_eq!(precise_coord.z(), 0.555666777888999);
    }
}
