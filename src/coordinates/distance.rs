//! Distance engine
//!
//! Great-circle (orthodromic) distance on a sphere using the spherical law of
//! cosines:
//!
//! ```text
//! θ = acos( sin(lat₁)·sin(lat₂) + cos(lat₁)·cos(lat₂)·cos(Δlon) )
//! d = R · θ
//! ```
//!
//! `Δlon` is the shortest longitude separation from
//! [`longitudinal_distance`], so paths across the antimeridian are measured
//! the short way round.

use super::spheric::SphericCoordinate;
use super::validation::assert_same_radius;
use crate::constants::{DEG2RAD, FULL_CIRCLE_DEG, MAX_LONGITUDE};
use crate::errors::Result;

/// Absolute difference of two latitudes in degrees
#[inline]
pub fn latitudinal_distance(latitude: f64, other: f64) -> f64 {
    (latitude - other).abs()
}

/// Shortest separation of two longitudes in degrees
///
/// For longitudes on opposite sides of the prime meridian the separation
/// through 0° is `|lon₁| + |lon₂|`; beyond 180° the way through the
/// antimeridian is shorter. The result is always in [0, 180].
///
/// # Examples
///
/// ```rust
/// use orthodrome::coordinates::distance::longitudinal_distance;
///
/// assert_eq!(longitudinal_distance(-150.0, 150.0), 60.0);
/// assert_eq!(longitudinal_distance(-20.0, 30.0), 50.0);
/// assert_eq!(longitudinal_distance(20.0, 90.0), 70.0);
/// ```
#[inline]
pub fn longitudinal_distance(longitude: f64, other: f64) -> f64 {
    if longitude.signum() != other.signum() {
        let through_prime_meridian = longitude.abs() + other.abs();
        if through_prime_meridian > MAX_LONGITUDE {
            FULL_CIRCLE_DEG - through_prime_meridian
        } else {
            through_prime_meridian
        }
    } else {
        (longitude - other).abs()
    }
}

/// Central angle between two positions in radians, in [0, π]
///
/// Radii are ignored. Identical angular positions yield exactly 0.
pub fn central_angle(from: &SphericCoordinate, to: &SphericCoordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.latitude() * DEG2RAD;
    let lat2 = to.latitude() * DEG2RAD;
    let delta_lon = longitudinal_distance(from.longitude(), to.longitude()) * DEG2RAD;

    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();

    // Handle numerical precision issues near 0 and π
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Great-circle distance between two coordinates on the same sphere
///
/// Fails with [`crate::CoordinateError::InvalidArgument`] if the radii
/// differ.
///
/// # Examples
///
/// ```rust
/// use orthodrome::coordinates::distance::orthodromic_distance;
/// use orthodrome::coordinates::SphericCoordinate;
///
/// let yakutsk = SphericCoordinate::on_earth(62.03, 129.6).unwrap();
/// let sydney = SphericCoordinate::on_earth(-33.86, 151.2).unwrap();
/// let km = orthodromic_distance(&yakutsk, &sydney).unwrap();
/// assert!((km - 10838.0).abs() < 0.5);
/// ```
pub fn orthodromic_distance(from: &SphericCoordinate, to: &SphericCoordinate) -> Result<f64> {
    assert_same_radius(from.radius(), to.radius())?;

    // Radii may differ by rounding; averaging keeps the result symmetric
    let radius = 0.5 * from.radius() + 0.5 * to.radius();
    let distance = radius * central_angle(from, to);

    debug_assert!(distance >= 0.0);
    Ok(distance)
}
