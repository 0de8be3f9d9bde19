//! Spatial coordinates derived from a locator.

use std::ops::Sub;

/// A point (or displacement) in scaled `X`/`Y`/`Z` space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Scaled X coordinate.
    pub x: f64,
    /// Scaled Y coordinate.
    pub y: f64,
    /// Scaled Z coordinate.
    pub z: f64,
}

impl Position {
    /// Create a position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another displacement.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).norm()
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
