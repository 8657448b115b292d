//! Conversion engine between the spheric and cartesian representations
//!
//! Latitude and longitude are the two angular degrees of freedom and the
//! radius is the scale factor:
//!
//! ```text
//! x = r · cos(lat) · cos(lon)
//! y = r · cos(lat) · sin(lon)
//! z = r · sin(lat)
//! ```
//!
//! The inverse recovers `r = sqrt(x² + y² + z²)`, `lat = asin(z / r)` and
//! `lon = atan2(y, x)`. Angles are stored in degrees and converted to radians
//! only inside these functions. The radius is computed without squaring, so
//! every finite point whose length fits in an `f64` converts.
//!
//! The origin is the degenerate case: every spheric coordinate with radius 0
//! maps onto it, so it cannot be mapped back.

use log::debug;

use super::cartesian::CartesianCoordinate;
use super::spheric::SphericCoordinate;
use crate::constants::{
    DEG2RAD, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, RAD2DEG,
};
use crate::errors::{CoordinateError, Result};

/// Maps a spheric coordinate to its cartesian equivalent
///
/// # Examples
///
/// ```rust
/// use orthodrome::coordinates::conversion::spheric_to_cartesian;
/// use orthodrome::coordinates::SphericCoordinate;
///
/// let north_pole = SphericCoordinate::new(90.0, 0.0, 1.0).unwrap();
/// let xyz = spheric_to_cartesian(&north_pole);
/// assert!(xyz.x().abs() < 1e-15);
/// assert!(xyz.y().abs() < 1e-15);
/// assert!((xyz.z() - 1.0).abs() < 1e-15);
/// ```
pub fn spheric_to_cartesian(spheric: &SphericCoordinate) -> CartesianCoordinate {
    let lat = spheric.latitude() * DEG2RAD;
    let lon = spheric.longitude() * DEG2RAD;
    let radius = spheric.radius();

    let cos_lat = lat.cos();
    // A validated spheric coordinate has finite, bounded components, so
    // the products are finite as well.
    CartesianCoordinate::from_parts(
        radius * cos_lat * lon.cos(),
        radius * cos_lat * lon.sin(),
        radius * lat.sin(),
    )
}

/// Maps a cartesian coordinate to its spheric equivalent
///
/// Fails with [`CoordinateError::DegenerateConversion`] at the origin, and
/// with [`CoordinateError::InvalidArgument`] if the magnitude overflows.
pub fn cartesian_to_spheric(cartesian: &CartesianCoordinate) -> Result<SphericCoordinate> {
    let radius = cartesian.magnitude();

    if radius == 0.0 {
        debug!("refusing to convert the cartesian origin to spheric form");
        return Err(CoordinateError::degenerate(
            "latitude and longitude are undefined for a point at radius 0",
        ));
    }

    // Rounding can push |z| / r a hair past 1
    let sin_lat = (cartesian.z() / radius).clamp(-1.0, 1.0);
    let latitude = (sin_lat.asin() * RAD2DEG).clamp(MIN_LATITUDE, MAX_LATITUDE);
    let longitude =
        (cartesian.y().atan2(cartesian.x()) * RAD2DEG).clamp(MIN_LONGITUDE, MAX_LONGITUDE);

    SphericCoordinate::new(latitude, longitude, radius)
}
