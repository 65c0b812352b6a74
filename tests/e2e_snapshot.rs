//! End-to-end: editor JSON in, auto-connected editor JSON out.

use pretty_assertions::assert_eq;
use proximity_connect::{
    DetectionOptions, Error, FlowSnapshot, NodeId, Orientation, ProximityConnector,
};

const CANVAS: &str = r#"{
    "nodes": [
        { "id": "welcome",  "type": "intent", "position": { "x": 0,   "y": 0 },   "data": { "label": "Welcome" } },
        { "id": "pricing",  "type": "intent", "position": { "x": 220, "y": 0 },   "data": { "label": "Pricing", "keywords": ["cost", "price"] } },
        { "id": "fallback", "type": "intent", "position": { "x": 0,   "y": 130 }, "data": { "label": "Fallback" } },
        { "id": "faraway",  "type": "intent", "position": { "x": 2000, "y": 2000 }, "data": { "label": "Hours" } }
    ],
    "edges": [
        { "id": "e-welcome-pricing", "source": "welcome", "target": "pricing", "type": "smoothstep" }
    ]
}"#;

#[test]
fn test_snapshot_to_suggestions() {
    let snapshot = FlowSnapshot::from_json(CANVAS).unwrap();
    let options = DetectionOptions::from_json(r#"{ "detectionRadius": 300, "mode": "vertical" }"#).unwrap();
    let connector = ProximityConnector::new(options).unwrap();

    let suggestions = connector.detect(&snapshot.nodes, &snapshot.edges);
    let got: Vec<(&str, &str, Orientation)> = suggestions
        .iter()
        .map(|s| (s.source.as_str(), s.target.as_str(), s.orientation))
        .collect();
    assert_eq!(got, vec![("welcome", "fallback", Orientation::Vertical)]);
}

#[test]
fn test_auto_connect_and_write_back() {
    let mut snapshot = FlowSnapshot::from_json(CANVAS).unwrap();
    let connector = ProximityConnector::default();

    let new_edges = connector.auto_connect(&snapshot.nodes, &snapshot.edges);
    let added = snapshot.extend_edges(new_edges);
    assert!(added > 0);
    snapshot.validate().unwrap();

    // Fallback only ever receives; the far node stays isolated.
    let fallback = NodeId::from("fallback");
    let faraway = NodeId::from("faraway");
    assert!(snapshot.edges.iter().all(|e| e.source != fallback));
    assert!(snapshot.edges.iter().all(|e| e.source != faraway && e.target != faraway));

    // A second pass over the updated canvas has nothing left to add.
    assert!(connector.auto_connect(&snapshot.nodes, &snapshot.edges).is_empty());

    let json = snapshot.to_json_pretty().unwrap();
    let reloaded = FlowSnapshot::from_json(&json).unwrap();
    assert_eq!(reloaded.edges.len(), snapshot.edges.len());
    assert_eq!(reloaded.nodes[1].data.extra["keywords"], serde_json::json!(["cost", "price"]));
    assert!(reloaded.nodes.iter().all(|n| n.extra["type"] == serde_json::json!("intent")));
    let original = reloaded.edges.iter().find(|e| e.id.as_deref() == Some("e-welcome-pricing")).unwrap();
    assert_eq!(original.edge_type.as_deref(), Some("smoothstep"));
}

#[test]
fn test_contract_violations_fail_fast() {
    let dangling = r#"{ "nodes": [ { "id": "a", "position": { "x": 0, "y": 0 } } ],
                        "edges": [ { "source": "a", "target": "b" } ] }"#;
    assert!(matches!(FlowSnapshot::from_json(dangling), Err(Error::UnknownNode { .. })));

    let no_position = r#"{ "nodes": [ { "id": "a", "data": {} } ] }"#;
    assert!(matches!(FlowSnapshot::from_json(no_position), Err(Error::Serialization(_))));

    assert!(matches!(
        DetectionOptions::from_json(r#"{ "detectionRadius": -1 }"#),
        Err(Error::InvalidOptions(_))
    ));
}
