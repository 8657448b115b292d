//! Validation primitives for coordinate components
//!
//! Each `assert_*` function either returns `Ok` or fails with
//! [`CoordinateError::InvalidArgument`] naming the violated bound. The
//! `is_valid_*` predicates answer the same questions without building an error.

use crate::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, RADIUS_TOLERANCE,
};
use crate::errors::{CoordinateError, Result};

/// Returns true if `latitude` is finite and within [-90, 90] degrees
#[inline]
pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

/// Returns true if `longitude` is finite and within [-180, 180] degrees
#[inline]
pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Returns true if `radius` is finite and not negative
#[inline]
pub fn is_valid_radius(radius: f64) -> bool {
    radius.is_finite() && radius >= 0.0
}

/// Rejects a latitude outside [-90, 90] or not finite
pub fn assert_valid_latitude(latitude: f64) -> Result<()> {
    if is_valid_latitude(latitude) {
        Ok(())
    } else {
        Err(CoordinateError::invalid(format!(
            "latitude {} must be a finite value between {} and {} degrees",
            latitude, MIN_LATITUDE, MAX_LATITUDE
        )))
    }
}

/// Rejects a longitude outside [-180, 180] or not finite
pub fn assert_valid_longitude(longitude: f64) -> Result<()> {
    if is_valid_longitude(longitude) {
        Ok(())
    } else {
        Err(CoordinateError::invalid(format!(
            "longitude {} must be a finite value between {} and {} degrees",
            longitude, MIN_LONGITUDE, MAX_LONGITUDE
        )))
    }
}

/// Rejects a negative or non-finite radius
pub fn assert_valid_radius(radius: f64) -> Result<()> {
    if is_valid_radius(radius) {
        Ok(())
    } else {
        Err(CoordinateError::invalid(format!(
            "radius {} must be a finite, non-negative value",
            radius
        )))
    }
}

/// Checks that a named cartesian component is a finite number
pub fn assert_finite(component: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoordinateError::invalid(format!(
            "{} component {} must be finite",
            component, value
        )))
    }
}

/// Unwraps a coordinate that must be present for a cross-coordinate operation
///
/// # Examples
///
/// ```rust
/// use orthodrome::coordinates::validation::assert_not_null;
///
/// let present = Some(&5);
/// assert_eq!(assert_not_null(present).unwrap(), &5);
/// assert!(assert_not_null::<i32>(None).is_err());
/// ```
pub fn assert_not_null<T: ?Sized>(coordinate: Option<&T>) -> Result<&T> {
    coordinate.ok_or_else(|| CoordinateError::invalid("coordinate must not be absent"))
}

/// Checks that two radii describe the same sphere
///
/// The comparison is relative, scaled by the larger radius, so radii
/// recovered from cartesian components still match their source.
pub fn assert_same_radius(radius: f64, other: f64) -> Result<()> {
    let scale = radius.abs().max(other.abs());
    if (radius - other).abs() <= RADIUS_TOLERANCE * scale {
        Ok(())
    } else {
        Err(CoordinateError::invalid(format!(
            "cannot compare coordinates on spheres of different radius ({} vs {})",
            radius, other
        )))
    }
}
