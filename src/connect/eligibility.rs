//! Connection eligibility: may `a -> b` be suggested?
//!
//! Rules run in a fixed order and stop at the first failure:
//!
//! 1. distance within `detectionRadius`
//! 2. not a self-loop
//! 3. no existing edge between the pair, in either direction
//! 4. no direct reverse edge when cycles are disallowed
//! 5. the directional policy of the configured mode
//!
//! Only direct 2-node cycles are caught by rule 4. `a -> b -> c` followed by a
//! suggested `c -> a` is still eligible.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Edge, Node, NodeId};
use super::options::{ConnectionMode, DetectionOptions};
use super::proximity::{proximity, CompassDirection, ProximityInfo};

// ============================================================================
// Edge lookup
// ============================================================================

/// Answers "does `source -> target` already exist?".
pub trait EdgeLookup {
    fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool;

    fn has_edge_between(&self, a: &NodeId, b: &NodeId) -> bool {
        self.has_edge(a, b) || self.has_edge(b, a)
    }
}

/// Linear scan; fine for single checks.
impl EdgeLookup for [Edge] {
    fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool {
        self.iter().any(|e| e.links(source, target))
    }
}

impl EdgeLookup for Vec<Edge> {
    fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool {
        self.as_slice().has_edge(source, target)
    }
}

/// Outgoing adjacency built once per scan.
#[derive(Debug, Default, Clone)]
pub struct EdgeIndex<'a> {
    /// source -> targets
    outgoing: HashMap<&'a str, SmallVec<[&'a str; 4]>>,
}

impl<'a> EdgeIndex<'a> {
    pub fn new(edges: &'a [Edge]) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index.insert(&edge.source, &edge.target);
        }
        index
    }

    pub fn insert(&mut self, source: &'a NodeId, target: &'a NodeId) {
        let targets = self.outgoing.entry(source.as_str()).or_default();
        if !targets.contains(&target.as_str()) {
            targets.push(target.as_str());
        }
    }

    pub fn len(&self) -> usize {
        self.outgoing.values().map(SmallVec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }
}

impl EdgeLookup for EdgeIndex<'_> {
    fn has_edge(&self, source: &NodeId, target: &NodeId) -> bool {
        self.outgoing
            .get(source.as_str())
            .is_some_and(|targets| targets.contains(&target.as_str()))
    }
}

// ============================================================================
// Verdict
// ============================================================================

/// Why a candidate pair was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    OutOfRadius,
    SelfLoop,
    AlreadyConnected,
    WouldCycle,
    OutsideZone,
    UnsupportedMode,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::OutOfRadius => "outside detection radius",
            Self::SelfLoop => "self-loop",
            Self::AlreadyConnected => "already connected",
            Self::WouldCycle => "would close a 2-cycle",
            Self::OutsideZone => "outside directional zone",
            Self::UnsupportedMode => "unrecognized mode",
        };
        f.write_str(reason)
    }
}

/// Run every rule for `a -> b` and return the proximity on success.
pub fn check<E>(
    a: &Node,
    b: &Node,
    edges: &E,
    options: &DetectionOptions,
) -> Result<ProximityInfo, Rejection>
where
    E: EdgeLookup + ?Sized,
{
    let info = proximity(a, b);
    let verdict = evaluate(a, b, &info, edges, options);
    if let Err(reason) = verdict {
        tracing::trace!(source = %a.id, target = %b.id, distance = info.distance, %reason, "candidate rejected");
    }
    verdict.map(|()| info)
}

/// `true` when `a -> b` may be suggested.
pub fn is_eligible<E>(a: &Node, b: &Node, edges: &E, options: &DetectionOptions) -> bool
where
    E: EdgeLookup + ?Sized,
{
    check(a, b, edges, options).is_ok()
}

fn evaluate<E>(
    a: &Node,
    b: &Node,
    info: &ProximityInfo,
    edges: &E,
    options: &DetectionOptions,
) -> Result<(), Rejection>
where
    E: EdgeLookup + ?Sized,
{
    if info.distance > options.detection_radius {
        return Err(Rejection::OutOfRadius);
    }
    if a.id == b.id {
        return Err(Rejection::SelfLoop);
    }
    if edges.has_edge_between(&a.id, &b.id) {
        return Err(Rejection::AlreadyConnected);
    }
    // Implied by the previous rule for direct edges.
    if !options.allow_cycles && edges.has_edge(&b.id, &a.id) {
        return Err(Rejection::WouldCycle);
    }
    directional_policy(info, options)
}

fn directional_policy(info: &ProximityInfo, options: &DetectionOptions) -> Result<(), Rejection> {
    let zones = &options.zones;
    let horizontal = info.direction == CompassDirection::Right && info.distance < zones.horizontal;
    let vertical = info.direction == CompassDirection::Below && info.distance < zones.vertical;

    let accepted = match options.mode {
        ConnectionMode::Horizontal => horizontal,
        ConnectionMode::Vertical => vertical,
        ConnectionMode::Mixed => horizontal || vertical || info.distance < zones.diagonal,
        ConnectionMode::Unrecognized => return Err(Rejection::UnsupportedMode),
    };

    if accepted { Ok(()) } else { Err(Rejection::OutsideZone) }
}
