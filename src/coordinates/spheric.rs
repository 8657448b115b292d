//! # Spheric Coordinate Module
//!
//! A point described by latitude and longitude in degrees plus its radial
//! distance from the sphere's center. When no radius is given the point is
//! placed on the Earth ([`EARTH_RADIUS`]).
//!
//! ## Invariant
//!
//! Every live value satisfies:
//! - latitude is finite and in [-90, 90]
//! - longitude is finite and in [-180, 180]
//! - radius is finite and ≥ 0
//!
//! The invariant is checked by [`SphericCoordinate::new`], by each `with_*`
//! method and on deserialization, so an invalid coordinate can never exist.
//!
//! ## Equality
//!
//! [`Coordinate::is_equal`] compares latitude and longitude only. Two points
//! at the same angular position but at different radii count as the same
//! location.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{assert_valid_latitude, assert_valid_longitude, assert_valid_radius};
use super::{conversion, distance};
use super::{CartesianCoordinate, Coordinate, CoordinateKind};
use crate::constants::EARTH_RADIUS;
use crate::errors::Result;

/// Latitude, longitude and radius of a point on a sphere
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawSpheric")]
pub struct SphericCoordinate {
    latitude: f64,
    longitude: f64,
    radius: f64,
}

#[derive(Deserialize)]
struct RawSpheric {
    latitude: f64,
    longitude: f64,
    #[serde(default = "earth_radius")]
    radius: f64,
}

fn earth_radius() -> f64 {
    EARTH_RADIUS
}

impl TryFrom<RawSpheric> for SphericCoordinate {
    type Error = crate::CoordinateError;

    fn try_from(raw: RawSpheric) -> Result<Self> {
        SphericCoordinate::new(raw.latitude, raw.longitude, raw.radius)
    }
}

impl SphericCoordinate {
    /// Creates a validated spheric coordinate
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees in [-90, 90]
    /// * `longitude` - Degrees in [-180, 180]
    /// * `radius` - Distance from the center, ≥ 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orthodrome::coordinates::SphericCoordinate;
    ///
    /// let coord = SphericCoordinate::new(-12.0, 92.0, 1.0).unwrap();
    /// assert_eq!(coord.latitude(), -12.0);
    ///
    /// assert!(SphericCoordinate::new(91.0, 0.0, 1.0).is_err());
    /// assert!(SphericCoordinate::new(0.0, -181.0, 1.0).is_err());
    /// assert!(SphericCoordinate::new(0.0, 0.0, -1.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64, radius: f64) -> Result<Self> {
        assert_valid_latitude(latitude)?;
        assert_valid_longitude(longitude)?;
        assert_valid_radius(radius)?;
        Ok(SphericCoordinate {
            latitude,
            longitude,
            radius,
        })
    }

    /// Creates a coordinate on the Earth's surface
    pub fn on_earth(latitude: f64, longitude: f64) -> Result<Self> {
        Self::new(latitude, longitude, EARTH_RADIUS)
    }

    /// Latitude in degrees, positive north of the equator
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east of the prime meridian
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Distance from the center of the sphere
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns a copy with `latitude` replaced
    pub fn with_latitude(&self, latitude: f64) -> Result<Self> {
        Self::new(latitude, self.longitude, self.radius)
    }

    /// Returns a copy with `longitude` replaced
    pub fn with_longitude(&self, longitude: f64) -> Result<Self> {
        Self::new(self.latitude, longitude, self.radius)
    }

    /// Returns a copy with `radius` replaced
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::new(self.latitude, self.longitude, radius)
    }

    /// Converts to cartesian form
    pub fn to_cartesian(&self) -> CartesianCoordinate {
        conversion::spheric_to_cartesian(self)
    }

    /// Absolute latitude difference in degrees
    pub fn latitudinal_distance(&self, other: &SphericCoordinate) -> f64 {
        distance::latitudinal_distance(self.latitude, other.latitude)
    }

    /// Shortest longitude separation in degrees, always in [0, 180]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orthodrome::coordinates::SphericCoordinate;
    ///
    /// let west = SphericCoordinate::on_earth(0.0, -150.0).unwrap();
    /// let east = SphericCoordinate::on_earth(0.0, 150.0).unwrap();
    /// assert_eq!(west.longitudinal_distance(&east), 60.0);
    /// ```
    pub fn longitudinal_distance(&self, other: &SphericCoordinate) -> f64 {
        distance::longitudinal_distance(self.longitude, other.longitude)
    }

    /// Bit patterns of (latitude, longitude, radius) used as interning key
    ///
    /// The radius is part of the key even though equality ignores it, so
    /// interning never swaps a point onto a different sphere.
    pub(crate) fn key(&self) -> [u64; 3] {
        [
            self.latitude.to_bits(),
            self.longitude.to_bits(),
            self.radius.to_bits(),
        ]
    }

    fn same_position(&self, other: &SphericCoordinate) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Default for SphericCoordinate {
    fn default() -> Self {
        SphericCoordinate {
            latitude: 0.0,
            longitude: 0.0,
            radius: EARTH_RADIUS,
        }
    }
}

impl PartialEq for SphericCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.same_position(other)
    }
}

impl fmt::Display for SphericCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spheric coordinate with latitude: {} and longitude: {}",
            self.latitude, self.longitude
        )
    }
}

impl Coordinate for SphericCoordinate {
    fn kind(&self) -> CoordinateKind {
        CoordinateKind::Spheric
    }

    fn to_cartesian(&self) -> CartesianCoordinate {
        SphericCoordinate::to_cartesian(self)
    }

    fn to_spheric(&self) -> Result<SphericCoordinate> {
        Ok(*self)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn latitude(&self) -> Result<f64> {
        Ok(self.latitude)
    }

    fn longitude(&self) -> Result<f64> {
        Ok(self.longitude)
    }

    fn as_spheric(&self) -> Option<&SphericCoordinate> {
        Some(self)
    }

    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        other
            .as_spheric()
            .is_some_and(|other| self.same_position(other))
    }
}
