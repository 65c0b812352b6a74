//! Relationship scanner: rank every eligible ordered pair.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{Edge, Node, NodeId};
use super::eligibility::{check, EdgeIndex};
use super::options::DetectionOptions;
use super::proximity::CompassDirection;

/// Prefix of ids given to edges materialized from suggestions.
pub const AUTO_EDGE_PREFIX: &str = "auto";

/// Axis along which a suggestion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn of(direction: CompassDirection) -> Self {
        if direction.is_horizontal() { Self::Horizontal } else { Self::Vertical }
    }
}

/// A proposed `source -> target` edge. The caller decides whether to create it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedConnection {
    pub source: NodeId,
    pub target: NodeId,
    /// In `[0, 1]`; 1 at zero distance, 0 at the detection radius.
    pub confidence: f64,
    #[serde(rename = "type")]
    pub orientation: Orientation,
}

impl SuggestedConnection {
    /// Materialize as an animated edge with id `auto-<source>-<target>`.
    pub fn to_edge(&self) -> Edge {
        Edge::new(self.source.clone(), self.target.clone())
            .with_id(format!("{AUTO_EDGE_PREFIX}-{}-{}", self.source, self.target))
            .animated()
    }
}

/// `max(0, 1 - distance / radius)`, capped at 1.
///
/// Evaluated as `(radius - distance) / radius` so that any distance strictly
/// inside the radius scores above zero.
pub fn confidence(distance: f64, detection_radius: f64) -> f64 {
    ((detection_radius - distance) / detection_radius).max(0.0).min(1.0)
}

/// Scan every ordered pair `(a, b)` with `a != b` and return the eligible
/// ones, highest confidence first. Ties keep discovery order.
///
/// Fallback nodes are skipped as sources but may still be targets.
pub fn detect(nodes: &[Node], edges: &[Edge], options: &DetectionOptions) -> Vec<SuggestedConnection> {
    let index = EdgeIndex::new(edges);
    let mut suggestions = Vec::new();

    for (i, a) in nodes.iter().enumerate() {
        if a.is_fallback() {
            continue;
        }
        for (j, b) in nodes.iter().enumerate() {
            if i != j {
                suggestions.extend(suggest(a, b, &index, options));
            }
        }
    }

    sort_by_confidence(&mut suggestions);
    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        suggestions = suggestions.len(),
        mode = ?options.mode,
        "proximity scan complete"
    );
    suggestions
}

/// The suggestions of [`detect`] whose source or target is `node`, found
/// without scanning unrelated pairs. Order is identical to filtering the
/// full scan.
pub fn detect_around(
    node: &NodeId,
    nodes: &[Node],
    edges: &[Edge],
    options: &DetectionOptions,
) -> Vec<SuggestedConnection> {
    let anchors: SmallVec<[usize; 1]> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| &n.id == node)
        .map(|(i, _)| i)
        .collect();
    if anchors.is_empty() {
        return Vec::new();
    }

    let index = EdgeIndex::new(edges);
    let mut suggestions = Vec::new();

    for (i, a) in nodes.iter().enumerate() {
        if a.is_fallback() {
            continue;
        }
        if &a.id == node {
            for (j, b) in nodes.iter().enumerate() {
                if i != j {
                    suggestions.extend(suggest(a, b, &index, options));
                }
            }
        } else {
            for &k in &anchors {
                suggestions.extend(suggest(a, &nodes[k], &index, options));
            }
        }
    }

    sort_by_confidence(&mut suggestions);
    tracing::debug!(node = %node, suggestions = suggestions.len(), "proximity scan around node");
    suggestions
}

fn suggest(a: &Node, b: &Node, index: &EdgeIndex<'_>, options: &DetectionOptions) -> Option<SuggestedConnection> {
    let info = check(a, b, index, options).ok()?;
    Some(SuggestedConnection {
        source: a.id.clone(),
        target: b.id.clone(),
        confidence: confidence(info.distance, options.detection_radius),
        orientation: Orientation::of(info.direction),
    })
}

/// Descending confidence; `sort_by` is stable so ties keep their order.
pub(crate) fn sort_by_confidence(suggestions: &mut [SuggestedConnection]) {
    suggestions.sort_by(|x, y| y.confidence.total_cmp(&x.confidence));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::options::ConnectionMode;

    fn ids(suggestions: &[SuggestedConnection]) -> Vec<(&str, &str)> {
        suggestions.iter().map(|s| (s.source.as_str(), s.target.as_str())).collect()
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(detect(&[], &[], &DetectionOptions::default()).is_empty());
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(confidence(0.0, 350.0), 1.0);
        assert_eq!(confidence(175.0, 350.0), 0.5);
        assert_eq!(confidence(350.0, 350.0), 0.0);
        assert_eq!(confidence(500.0, 350.0), 0.0);
    }

    #[test]
    fn horizontal_chain_ranks_closer_pair_first() {
        let nodes = vec![
            Node::new("a", 0.0, 0.0),
            Node::new("b", 200.0, 0.0),
            Node::new("c", 420.0, 0.0),
        ];
        let options = DetectionOptions::new(350.0, ConnectionMode::Horizontal);
        let suggestions = detect(&nodes, &[], &options);
        assert_eq!(ids(&suggestions), vec![("a", "b"), ("b", "c")]);
        assert!(suggestions[0].confidence > suggestions[1].confidence);
        assert!(suggestions.iter().all(|s| s.orientation == Orientation::Horizontal));
    }

    #[test]
    fn ties_keep_discovery_order() {
        let nodes = vec![
            Node::new("a", 0.0, 0.0),
            Node::new("b", 0.0, 100.0),
            Node::new("c", 1000.0, 0.0),
            Node::new("d", 1000.0, 100.0),
        ];
        let options = DetectionOptions::new(350.0, ConnectionMode::Vertical);
        let suggestions = detect(&nodes, &[], &options);
        assert_eq!(ids(&suggestions), vec![("a", "b"), ("c", "d")]);
        assert_eq!(suggestions[0].confidence, suggestions[1].confidence);
        assert_eq!(suggestions[0].orientation, Orientation::Vertical);
    }

    #[test]
    fn fallback_is_target_only() {
        let nodes = vec![
            Node::new("a", 0.0, 0.0),
            Node::new("fb", 200.0, 0.0).with_label("Fallback"),
        ];
        let suggestions = detect(&nodes, &[], &DetectionOptions::default());
        assert_eq!(ids(&suggestions), vec![("a", "fb")]);
    }

    #[test]
    fn detect_around_matches_filtered_full_scan() {
        let nodes = vec![
            Node::new("a", 0.0, 0.0),
            Node::new("b", 200.0, 0.0),
            Node::new("c", 0.0, 120.0),
            Node::new("fb", 220.0, 130.0).with_label("Fallback"),
            Node::new("d", 2000.0, 0.0),
        ];
        let edges = vec![Edge::new("a", "c")];
        let options = DetectionOptions::default();

        for id in ["a", "b", "c", "fb", "d", "missing"] {
            let id = NodeId::from(id);
            let mut expected = detect(&nodes, &edges, &options);
            expected.retain(|s| s.source == id || s.target == id);
            assert_eq!(detect_around(&id, &nodes, &edges, &options), expected, "around {id}");
        }
    }

    #[test]
    fn to_edge_is_animated_with_stable_id() {
        let suggestion = SuggestedConnection {
            source: "a".into(),
            target: "b".into(),
            confidence: 0.5,
            orientation: Orientation::Horizontal,
        };
        let edge = suggestion.to_edge();
        assert_eq!(edge.id.as_deref(), Some("auto-a-b"));
        assert!(edge.animated);
        assert!(edge.links(&"a".into(), &"b".into()));
    }
}
