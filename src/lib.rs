//! # proximity-connect — Spatial Auto-Connection for Flow Editors
//!
//! Given the nodes of a visual flow editor (positioned, sized intents) and
//! the directed edges already drawn between them, suggest which pairs should
//! be wired together based on how close they sit and in which direction.
//!
//! ## Design Principles
//!
//! 1. **Read-only**: the caller owns nodes and edges; this crate only returns suggestions
//! 2. **Pure functions**: every operation is synchronous and deterministic
//! 3. **Named policy**: zone thresholds are configuration, not magic numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use proximity_connect::{ConnectionMode, DetectionOptions, Edge, Node, ProximityConnector};
//!
//! # fn example() -> proximity_connect::Result<()> {
//! let connector = ProximityConnector::new(DetectionOptions::new(350.0, ConnectionMode::Horizontal))?;
//!
//! let nodes = vec![
//!     Node::new("greeting", 0.0, 0.0),
//!     Node::new("ask-name", 200.0, 0.0),
//! ];
//! let edges: Vec<Edge> = Vec::new();
//!
//! for suggestion in connector.detect(&nodes, &edges) {
//!     println!("{} -> {} ({:.2})", suggestion.source, suggestion.target, suggestion.confidence);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Modes
//!
//! | Mode | Accepts |
//! |------|---------|
//! | `horizontal` | `right` neighbours closer than the horizontal zone (250) |
//! | `vertical` | `below` neighbours closer than the vertical zone (150) |
//! | `mixed` | either of the above, or anything closer than the diagonal zone (300) |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod connect;
pub mod snapshot;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Node, NodeId, NodeData, Edge, Point, Position,
    DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT, FALLBACK_LABEL,
};

// ============================================================================
// Re-exports: Connector
// ============================================================================

pub use connect::{
    proximity, is_eligible, check, detect, detect_around, nearby, confidence,
    CompassDirection, ProximityInfo, ConnectionMode, DetectionOptions, ZoneThresholds,
    EdgeIndex, EdgeLookup, Rejection, Orientation, SuggestedConnection,
};

pub use snapshot::FlowSnapshot;

// ============================================================================
// Top-level connector handle
// ============================================================================

/// Validated options plus the connector operations bound to them.
///
/// Holds no state beyond its options, so one instance can serve any number
/// of snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProximityConnector {
    options: DetectionOptions,
}

impl ProximityConnector {
    /// Create a connector, rejecting non-positive radii or zones.
    pub fn new(options: DetectionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &DetectionOptions {
        &self.options
    }

    /// Ranked suggestions over the whole snapshot.
    pub fn detect(&self, nodes: &[Node], edges: &[Edge]) -> Vec<SuggestedConnection> {
        connect::detect(nodes, edges, &self.options)
    }

    /// Suggestions that touch `node`, e.g. after it was dropped.
    pub fn suggestions_for(&self, node: &NodeId, nodes: &[Node], edges: &[Edge]) -> Vec<SuggestedConnection> {
        connect::detect_around(node, nodes, edges, &self.options)
    }

    /// Other nodes within the detection radius of `target`, nearest first.
    pub fn nearby(&self, target: &Node, nodes: &[Node]) -> Vec<ProximityInfo> {
        connect::nearby(target, nodes, self.options.detection_radius)
    }

    pub fn is_eligible(&self, a: &Node, b: &Node, edges: &[Edge]) -> bool {
        connect::is_eligible(a, b, edges, &self.options)
    }

    pub fn check(&self, a: &Node, b: &Node, edges: &[Edge]) -> std::result::Result<ProximityInfo, Rejection> {
        connect::check(a, b, edges, &self.options)
    }

    /// Turn ranked suggestions into edges to add.
    ///
    /// Suggestions are taken best-first; each one is re-checked against the
    /// existing edges plus those accepted earlier in this batch, so a batch
    /// never contains both `a -> b` and `b -> a`.
    pub fn auto_connect(&self, nodes: &[Node], edges: &[Edge]) -> Vec<Edge> {
        let suggestions = self.detect(nodes, edges);
        let mut index = EdgeIndex::new(edges);
        let mut accepted = Vec::new();

        for suggestion in &suggestions {
            if index.has_edge_between(&suggestion.source, &suggestion.target) {
                continue;
            }
            index.insert(&suggestion.source, &suggestion.target);
            accepted.push(suggestion.to_edge());
        }

        tracing::debug!(
            suggested = suggestions.len(),
            accepted = accepted.len(),
            "auto-connect batch"
        );
        accepted
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid detection options: {0}")]
    InvalidOptions(String),

    #[error("Invalid geometry for node {node}: {reason}")]
    InvalidGeometry { node: NodeId, reason: String },

    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("Edge {edge} references unknown node {node}")]
    UnknownNode { edge: String, node: NodeId },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Vec<Node> {
        vec![
            Node::new("a", 0.0, 0.0),
            Node::new("b", 200.0, 0.0),
            Node::new("c", 0.0, 120.0),
        ]
    }

    #[test]
    fn new_rejects_invalid_radius() {
        assert!(matches!(
            ProximityConnector::new(DetectionOptions::new(0.0, ConnectionMode::Mixed)),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn auto_connect_never_adds_both_directions() {
        let connector = ProximityConnector::default();
        let nodes = row();

        // Mixed mode suggests a->b and b->a (diagonal zone); only the first survives.
        let suggestions = connector.detect(&nodes, &[]);
        assert!(suggestions.iter().any(|s| s.source.as_str() == "b" && s.target.as_str() == "a"));

        let added = connector.auto_connect(&nodes, &[]);
        for edge in &added {
            let reversed = added.iter().filter(|e| e.links(&edge.target, &edge.source)).count();
            assert_eq!(reversed, 0, "{} -> {} added in both directions", edge.source, edge.target);
        }
        assert!(added.iter().all(|e| e.animated));
    }

    #[test]
    fn auto_connect_respects_existing_edges() {
        let connector = ProximityConnector::default();
        let edges = vec![Edge::new("a", "b")];
        let added = connector.auto_connect(&row(), &edges);
        assert!(added.iter().all(|e| !e.connects(&"a".into(), &"b".into())));
    }

    #[test]
    fn suggestions_for_filters_to_one_node() {
        let connector = ProximityConnector::default();
        let c = NodeId::from("c");
        let suggestions = connector.suggestions_for(&c, &row(), &[]);
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| s.source == c || s.target == c));
    }

    #[test]
    fn nearby_uses_detection_radius() {
        let connector = ProximityConnector::new(DetectionOptions::new(150.0, ConnectionMode::Mixed)).unwrap();
        let nodes = row();
        let found = connector.nearby(&nodes[0], &nodes);
        let ids: Vec<_> = found.iter().map(|i| i.target.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }
}
