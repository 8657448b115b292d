//! Named places that hold a shared coordinate

use std::fmt;
use std::sync::Arc;

use crate::coordinates::validation::assert_not_null;
use crate::coordinates::{Coordinate, CoordinateRef};
use crate::errors::Result;

/// A named place with an optional coordinate
///
/// The coordinate is shared rather than owned; several locations obtained
/// through the same registry may point at one instance.
#[derive(Debug, Clone, Default)]
pub struct Location {
    name: String,
    coordinate: Option<CoordinateRef>,
}

impl Location {
    /// Create a location at `coordinate`
    pub fn new(name: impl Into<String>, coordinate: CoordinateRef) -> Self {
        Self {
            name: name.into(),
            coordinate: Some(coordinate),
        }
    }

    /// Create a location that has not been placed yet
    pub fn unplaced(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinate: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Option<&CoordinateRef> {
        self.coordinate.as_ref()
    }

    /// Returns a copy with the name replaced
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinate: self.coordinate.clone(),
        }
    }

    /// Returns a copy placed at `coordinate`
    pub fn with_coordinate(&self, coordinate: CoordinateRef) -> Self {
        Self {
            name: self.name.clone(),
            coordinate: Some(coordinate),
        }
    }

    /// Great-circle distance between two placed locations
    ///
    /// Fails with [`crate::CoordinateError::InvalidArgument`] if either
    /// location has no coordinate.
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        let from = assert_not_null(self.coordinate.as_deref())?;
        let to = assert_not_null(other.coordinate.as_deref())?;
        from.distance_to(to)
    }

    /// True if both locations sit on the same shared or equal coordinate
    pub fn is_at_same_place(&self, other: &Location) -> bool {
        match (&self.coordinate, &other.coordinate) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.is_equal(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinate {
            Some(coordinate) => write!(f, "{} ({})", self.name, coordinate),
            None => write!(f, "{} (unplaced)", self.name),
        }
    }
}
