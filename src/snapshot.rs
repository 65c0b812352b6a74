//! Flow snapshot: the editor's `{ nodes, edges }` state as JSON.
//!
//! The editor hands over its current canvas as a single document. This
//! module parses it, checks it for caller-contract violations, and writes it
//! back out (e.g. after auto-connected edges were appended).
//!
//! ```text
//! editor state ─► FlowSnapshot::from_json() ─► validate() ─► ProximityConnector
//! ```

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::{Error, Result};

/// A point-in-time copy of the flow editor's nodes and edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl FlowSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse and validate a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// Check the caller contract: unique node ids, finite positions,
    /// positive sizes, and edges that only reference known nodes.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.nodes.len());

        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
            validate_geometry(node)?;
        }

        for edge in &self.edges {
            for end in [&edge.source, &edge.target] {
                if !seen.contains(end.as_str()) {
                    return Err(Error::UnknownNode {
                        edge: edge.id.clone().unwrap_or_else(|| format!("{}->{}", edge.source, edge.target)),
                        node: end.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Append edges, skipping any `source -> target` already present.
    /// Returns how many were added.
    pub fn extend_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> usize {
        let mut added = 0;
        for edge in edges {
            if self.edges.iter().any(|e| e.links(&edge.source, &edge.target)) {
                continue;
            }
            self.edges.push(edge);
            added += 1;
        }
        added
    }
}

fn validate_geometry(node: &Node) -> Result<()> {
    if !node.position.is_finite() {
        return Err(Error::InvalidGeometry {
            node: node.id.clone(),
            reason: format!("position ({}, {}) is not finite", node.position.x, node.position.y),
        });
    }
    for (name, size) in [("width", node.width), ("height", node.height)] {
        if let Some(v) = size {
            if !(v.is_finite() && v > 0.0) {
                return Err(Error::InvalidGeometry {
                    node: node.id.clone(),
                    reason: format!("{name} {v} must be a positive finite number"),
                });
            }
        }
    }
    Ok(())
}
