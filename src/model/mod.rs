//! # Flow Graph Model
//!
//! Plain data describing the editor's canvas: positioned nodes and the
//! directed edges between them. These types are owned by the caller; the
//! connector only reads them.
//!
//! This module is pure data: no I/O, no state.

pub mod node;
pub mod edge;
pub mod geometry;

pub use node::{Node, NodeId, NodeData, FALLBACK_LABEL};
pub use edge::Edge;
pub use geometry::{Point, Position, DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT};
