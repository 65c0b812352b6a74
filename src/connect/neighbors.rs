//! Neighbor lookup for live hover suggestions while a node is dragged.

use crate::model::Node;
use super::proximity::{proximity, ProximityInfo};

/// Every other node whose center lies within `radius` of `target`'s center,
/// nearest first; equal distances keep input order. The target itself
/// (matched by id) is excluded.
pub fn nearby(target: &Node, all_nodes: &[Node], radius: f64) -> Vec<ProximityInfo> {
    let mut found: Vec<ProximityInfo> = all_nodes
        .iter()
        .filter(|node| node.id != target.id)
        .map(|node| proximity(target, node))
        .filter(|info| info.distance <= radius)
        .collect();

    found.sort_by(|x, y| x.distance.total_cmp(&y.distance));
    tracing::trace!(node = %target.id, radius, found = found.len(), "nearby lookup");
    found
}
