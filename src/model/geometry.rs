//! Node geometry: positions, sizes and center points.
//!
//! Coordinates are editor canvas units. Positions are anchored at the node's
//! top-left corner; the connector reasons about centers.

use serde::{Deserialize, Serialize};

use super::Node;

/// Width used when a node does not report its own.
pub const DEFAULT_NODE_WIDTH: f64 = 280.0;

/// Height used when a node does not report its own.
pub const DEFAULT_NODE_HEIGHT: f64 = 200.0;

/// Top-left anchored position of a node on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in canvas space (used for centers).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Node {
    /// Effective width, falling back to [`DEFAULT_NODE_WIDTH`].
    pub fn effective_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_NODE_WIDTH)
    }

    /// Effective height, falling back to [`DEFAULT_NODE_HEIGHT`].
    pub fn effective_height(&self) -> f64 {
        self.height.unwrap_or(DEFAULT_NODE_HEIGHT)
    }

    /// Center point: `(x + width/2, y + height/2)`.
    pub fn center(&self) -> Point {
        Point {
            x: self.position.x + self.effective_width() / 2.0,
            y: self.position.y + self.effective_height() / 2.0,
        }
    }
}
