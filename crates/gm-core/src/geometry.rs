//! Planar positions carried by vertices.
//!
//! Algorithms never interpret positions; they only compute layouts for
//! generated graphs and midpoints for derived ones.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the midpoint between two positions.
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the point at `angle` radians on the circle of `radius` around `self`.
    pub fn on_circle(self, radius: f64, angle: f64) -> Position {
        Position::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }

    /// Returns the angle of slot `index` out of `count` evenly spaced slots.
    pub fn slot_angle(index: usize, count: usize) -> f64 {
        std::f64::consts::TAU * index as f64 / count.max(1) as f64
    }

    /// Returns whether `point` lies in the axis-aligned square of half-width `radius`.
    pub fn contains(self, point: Position, radius: f64) -> bool {
        (self.x - radius..=self.x + radius).contains(&point.x)
            && (self.y - radius..=self.y + radius).contains(&point.y)
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Position::new(value[0], value[1])
    }
}

impl From<Position> for [f64; 2] {
    fn from(value: Position) -> Self {
        [value.x, value.y]
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Position::new(value.0, value.1)
    }
}
