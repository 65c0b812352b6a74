//! Pairwise proximity between two node centers.

use serde::{Deserialize, Serialize};

use crate::model::{Node, NodeId};

/// Coarse compass direction from one node center to another.
///
/// There is no diagonal: the dominant axis always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompassDirection {
    Left,
    Right,
    Above,
    Below,
}

impl CompassDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Geometric relationship from a reference node to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityInfo {
    pub target: NodeId,
    pub distance: f64,
    pub direction: CompassDirection,
    /// `atan2(Δy, Δx)` in degrees, in `(-180, 180]`.
    pub angle: f64,
}

/// Proximity from `a` to `b`, measured between their centers.
///
/// Direction follows the dominant axis: `right`/`left` when `|Δx| > |Δy|`,
/// otherwise `below`/`above`. Identical centers resolve to `below`.
pub fn proximity(a: &Node, b: &Node) -> ProximityInfo {
    let from = a.center();
    let to = b.center();
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 { CompassDirection::Right } else { CompassDirection::Left }
    } else if dy < 0.0 {
        CompassDirection::Above
    } else {
        CompassDirection::Below
    };

    ProximityInfo {
        target: b.id.clone(),
        distance: dx.hypot(dy),
        direction,
        angle: dy.atan2(dx).to_degrees(),
    }
}
