use natal_aspects::aspects::AspectKind;
use natal_aspects::{
    angle_difference, calculate_aspect_strength, compute_aspects, AspectCalculator, AspectError,
    AspectSettings, Bodies, Body,
};
use std::collections::{HashMap, HashSet};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn chart() -> Bodies {
    [
        ("sun", 87.3),
        ("moon", 211.9),
        ("mercury", 58.0),
        ("venus", 44.1),
        ("mars", 356.8),
        ("jupiter", 98.2),
        ("saturn", 293.6),
        ("uranus", 278.5),
        ("neptune", 283.9),
        ("pluto", 225.7),
        ("north_node", 309.4),
        ("chiron", 101.0),
    ]
    .iter()
    .map(|(name, lon)| (name.to_string(), Body::at(*lon)))
    .collect()
}

#[test]
fn test_angle_difference_properties() {
    let samples = [-720.5, -90.0, 0.0, 12.25, 179.9, 180.0, 359.99, 725.0];
    for &a in &samples {
        assert_eq!(angle_difference(a, a).unwrap(), 0.0);
        for &b in &samples {
            let d = angle_difference(a, b).unwrap();
            assert!((0.0..=180.0).contains(&d), "{} vs {} gave {}", a, b, d);
            assert_eq!(d, angle_difference(b, a).unwrap());
        }
    }
    assert_eq!(angle_difference(0.0, 180.0).unwrap(), 180.0);
    assert_eq!(angle_difference(350.0, 10.0).unwrap(), 20.0);
}

#[test]
fn test_angle_difference_rejects_non_finite() {
    assert!(matches!(
        angle_difference(f64::NAN, 10.0),
        Err(AspectError::InvalidInput { .. })
    ));
    assert!(angle_difference(10.0, f64::INFINITY).is_err());
}

#[test]
fn test_strength_endpoints() {
    for max_orb in [0.5, 2.0, 8.0, 12.0] {
        assert_eq!(calculate_aspect_strength(0.0, max_orb, "conjunction").unwrap(), 1.0);
        assert_eq!(calculate_aspect_strength(max_orb, max_orb, "trine").unwrap(), 0.0);
    }
    assert_eq!(calculate_aspect_strength(-2.0, 8.0, "opposition").unwrap(), 0.675);
    assert_eq!(calculate_aspect_strength(1.0, 2.0, "biquintile").unwrap(), 0.25);
    assert!(calculate_aspect_strength(1.0, 0.0, "trine").is_err());
}

#[test]
fn test_one_aspect_per_pair() {
    init_logger();
    let aspects = compute_aspects(&chart(), &AspectSettings::default()).unwrap();
    assert!(!aspects.is_empty());

    let mut seen = HashSet::new();
    for aspect in &aspects {
        let mut pair = aspect.between.clone();
        pair.sort();
        assert!(seen.insert(pair), "duplicate pair {:?}", aspect.between);
        assert!((0.0..=1.0).contains(&aspect.strength));
    }
}

#[test]
fn test_pairs_follow_name_order() {
    init_logger();
    let aspects = compute_aspects(&chart(), &AspectSettings::default()).unwrap();
    let names: Vec<String> = chart().keys().cloned().collect();
    let position = |name: &str| names.iter().position(|n| n == name).unwrap();

    let order: Vec<(usize, usize)> = aspects
        .iter()
        .map(|a| (position(&a.between[0]), position(&a.between[1])))
        .collect();
    assert!(order.iter().all(|(i, j)| i < j));
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_include_objects_restricts_pairs() {
    init_logger();
    let settings = AspectSettings::including(["sun", "jupiter", "mercury", "vulcan"]);
    let aspects = compute_aspects(&chart(), &settings).unwrap();
    let allowed = ["sun", "jupiter", "mercury"];
    assert!(aspects
        .iter()
        .all(|a| allowed.contains(&a.between[0].as_str()) && allowed.contains(&a.between[1].as_str())));
    // sun 87.3 and jupiter 98.2 are 10.9 apart: outside every orb
    assert!(!aspects.iter().any(|a| a.connects("sun", "jupiter")));
    assert!(aspects.iter().any(|a| a.connects("mercury", "sun")));
}

#[test]
fn test_missing_longitude_fails_whole_call() {
    init_logger();
    let mut bodies = chart();
    bodies.insert("lilith".to_string(), Body::default());
    let err = compute_aspects(&bodies, &AspectSettings::including(["sun", "moon"])).unwrap_err();
    assert_eq!(
        err,
        AspectError::MissingField {
            body: "lilith".to_string(),
            field: "ecliptic_longitude_deg".to_string(),
        }
    );
}

#[test]
fn test_empty_bodies_is_invalid() {
    let err = compute_aspects(&Bodies::new(), &AspectSettings::default()).unwrap_err();
    assert!(matches!(err, AspectError::InvalidInput { .. }));
}

#[test]
fn test_orb_override_replaces_table() {
    init_logger();
    let mut bodies = Bodies::new();
    bodies.insert("sun".to_string(), Body::at(0.0));
    bodies.insert("moon".to_string(), Body::at(124.0));

    let mut orbs = HashMap::new();
    orbs.insert(AspectKind::Conjunction, 8.0);
    // trine is not listed, so it falls back to 5° and 4° still qualifies
    let aspects = compute_aspects(&bodies, &AspectSettings::default().with_orbs(orbs.clone())).unwrap();
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect, AspectKind::Trine);
    assert_eq!(aspects[0].strength, 0.16);

    orbs.insert(AspectKind::Trine, 3.0);
    let aspects = compute_aspects(&bodies, &AspectSettings::default().with_orbs(orbs)).unwrap();
    assert!(aspects.is_empty());
}

#[test]
fn test_aspect_serialization() {
    let calculator = AspectCalculator::new();
    let aspect = calculator
        .calculate_aspect("sun", 10.0, "mars", 40.5, &AspectSettings::default())
        .unwrap()
        .unwrap();
    let value = serde_json::to_value(&aspect).unwrap();
    assert_eq!(value["between"], serde_json::json!(["sun", "mars"]));
    assert_eq!(value["aspect"], "semi-sextile");
    assert_eq!(value["orb"], 0.5);
    assert_eq!(value["strength"], 0.15);
}
