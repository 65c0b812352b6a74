//! # Proximity Connector
//!
//! Infers which nodes of a flow should be wired together from where they sit
//! on the canvas. Everything here is a pure function over borrowed snapshots:
//! nothing is cached and no input is mutated.
//!
//! ```text
//! geometry::center ─► proximity ─► eligibility ─┬─► scanner::detect
//!                                               └─► neighbors::nearby
//! ```

pub mod proximity;
pub mod options;
pub mod eligibility;
pub mod scanner;
pub mod neighbors;

pub use proximity::{proximity, CompassDirection, ProximityInfo};
pub use options::{
    ConnectionMode, DetectionOptions, ZoneThresholds,
    DEFAULT_DETECTION_RADIUS, DEFAULT_HORIZONTAL_ZONE, DEFAULT_VERTICAL_ZONE, DEFAULT_DIAGONAL_ZONE,
};
pub use eligibility::{check, is_eligible, EdgeIndex, EdgeLookup, Rejection};
pub use scanner::{confidence, detect, detect_around, Orientation, SuggestedConnection, AUTO_EDGE_PREFIX};
pub use neighbors::nearby;
