use natal_aspects::aspects::{build_aspect_graph, AspectKind};
use natal_aspects::{compute_aspects, AspectGraph, AspectSettings, Bodies, Body};
use serde_json::json;

#[test]
fn test_empty_input_gives_empty_graph() {
    assert!(build_aspect_graph(&[]).is_empty());
    assert!(AspectGraph::from_json(&json!([])).is_empty());
    assert!(AspectGraph::from_json(&json!(null)).is_empty());
    assert!(AspectGraph::from_json(&json!({"between": ["sun", "moon"]})).is_empty());
}

#[test]
fn test_malformed_records_are_skipped_individually() {
    let records = json!([
        {"between": ["sun", "moon"], "aspect": "square"},
        {"between": ["sun"], "aspect": "trine"},
        {"aspect": "trine"},
        {"between": ["mars", "venus"]},
        {"between": [1, "venus"], "aspect": "trine"},
        {"between": ["mars", "venus"], "aspect": "biquintile"},
        "not a record",
        {"between": ["mars", "saturn"], "aspect": "opposition", "orb": 1.5},
    ]);
    let graph = AspectGraph::from_json(&records);

    assert_eq!(graph.node_count(), 4);
    assert!(graph.has_aspect_between("moon", "sun", AspectKind::Square));
    assert!(graph.has_aspect_between("saturn", "mars", AspectKind::Opposition));
    assert!(graph.edges("venus").is_empty());
}

#[test]
fn test_sextiles_stay_out_of_graph() {
    let records = json!([
        {"between": ["sun", "moon"], "aspect": "sextile"},
        {"between": ["sun", "mars"], "aspect": "semi-square"},
        {"between": ["sun", "venus"], "aspect": "semi-sextile"},
        {"between": ["sun", "saturn"], "aspect": "quincunx"},
    ]);
    let graph = AspectGraph::from_json(&records);
    let nodes: Vec<&str> = graph.nodes().collect();
    assert_eq!(nodes, vec!["saturn", "sun"]);
}

#[test]
fn test_graph_from_classified_chart() {
    let bodies: Bodies = [("sun", 0.0), ("moon", 120.0), ("mars", 240.0), ("venus", 60.0)]
        .iter()
        .map(|(name, lon)| (name.to_string(), Body::at(*lon)))
        .collect();
    let aspects = compute_aspects(&bodies, &AspectSettings::default()).unwrap();
    let graph = build_aspect_graph(&aspects);

    let trines: Vec<&str> = graph.neighbors("sun", AspectKind::Trine).collect();
    assert_eq!(trines, vec!["mars", "moon"]);
    // venus only makes sextiles and an opposition to mars
    assert_eq!(graph.edges("venus").len(), 1);
    assert!(graph.has_aspect_between("venus", "mars", AspectKind::Opposition));
}

#[test]
fn test_json_and_typed_builds_agree() {
    let bodies: Bodies = [("sun", 10.0), ("moon", 100.0), ("pluto", 190.0)]
        .iter()
        .map(|(name, lon)| (name.to_string(), Body::at(*lon)))
        .collect();
    let aspects = compute_aspects(&bodies, &AspectSettings::default()).unwrap();
    let from_json = AspectGraph::from_json(&serde_json::to_value(&aspects).unwrap());
    assert_eq!(from_json, build_aspect_graph(&aspects));
}

#[test]
fn test_inter_chart_same_name_pair_reaches_graph() {
    let natal: Bodies = [("sun", 10.0)].iter().map(|(n, l)| (n.to_string(), Body::at(*l))).collect();
    let partner: Bodies = [("sun", 13.0)].iter().map(|(n, l)| (n.to_string(), Body::at(*l))).collect();
    let aspects = natal_aspects::AspectCalculator::new()
        .compute_inter_chart_aspects(&natal, &partner, &AspectSettings::default())
        .unwrap();
    assert_eq!(aspects.len(), 1);

    let graph = build_aspect_graph(&aspects);
    assert!(graph.has_aspect_between("sun", "sun", AspectKind::Conjunction));
}
