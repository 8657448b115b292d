//! Constants module for spherical coordinate calculations

use std::f64::consts::PI;

// Earth
/// Earth's mean radius in kilometers, the default sphere for spheric coordinates
pub const EARTH_RADIUS: f64 = 6371.0;

// Angular bounds (degrees)
/// Southernmost latitude
pub const MIN_LATITUDE: f64 = -90.0;
/// Northernmost latitude
pub const MAX_LATITUDE: f64 = 90.0;
/// Westernmost longitude
pub const MIN_LONGITUDE: f64 = -180.0;
/// Easternmost longitude
pub const MAX_LONGITUDE: f64 = 180.0;
/// Degrees in a complete circle
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Comparison
/// Relative tolerance under which two radii count as the same sphere
///
/// A radius recovered from cartesian components goes through a square root
/// and is only equal to the original up to rounding.
pub const RADIUS_TOLERANCE: f64 = 1e-9;
