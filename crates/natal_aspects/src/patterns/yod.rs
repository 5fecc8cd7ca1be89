use crate::aspects::{Aspect, AspectGraph, AspectKind};
use crate::ephemeris::Bodies;
use crate::error::AspectError;
use crate::patterns::strength::yod_strength;
use crate::patterns::types::Yod;
use std::collections::HashSet;

/// Find focal bodies quincunx to two bodies that are sextile to each other.
///
/// Sextiles are not graph edges, so the base leg is looked up in the
/// aspect list. A focal body with three mutually sextile partners yields
/// one Yod per partner pair.
pub fn detect_yods(graph: &AspectGraph, aspects: &[Aspect], bodies: &Bodies) -> Result<Vec<Yod>, AspectError> {
    let sextiles: HashSet<(&str, &str)> = aspects
        .iter()
        .filter(|a| a.aspect == AspectKind::Sextile)
        .flat_map(|a| {
            let (x, y) = (a.between[0].as_str(), a.between[1].as_str());
            [(x, y), (y, x)]
        })
        .collect();

    let mut yods = Vec::new();
    for focal in bodies.keys() {
        let quincunx_to: Vec<&str> = graph.neighbors(focal, AspectKind::Quincunx).collect();
        if quincunx_to.len() < 2 {
            continue;
        }
        for i in 0..quincunx_to.len() {
            for j in (i + 1)..quincunx_to.len() {
                let (p1, p2) = (quincunx_to[i], quincunx_to[j]);
                if sextiles.contains(&(p1, p2)) {
                    yods.push(Yod {
                        focal_planet: focal.clone(),
                        base_planets: [p1.to_string(), p2.to_string()],
                        strength: yod_strength(focal, [p1, p2]),
                    });
                }
            }
        }
    }

    Ok(yods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::{build_aspect_graph, compute_aspects, AspectSettings};
    use crate::ephemeris::Body;

    fn chart(entries: &[(&str, f64)]) -> (Bodies, Vec<Aspect>) {
        let bodies: Bodies = entries
            .iter()
            .map(|(name, lon)| (name.to_string(), Body::at(*lon)))
            .collect();
        let aspects = compute_aspects(&bodies, &AspectSettings::default()).unwrap();
        (bodies, aspects)
    }

    #[test]
    fn test_classic_yod() {
        // sun sextile moon, both quincunx saturn
        let (bodies, aspects) = chart(&[("sun", 0.0), ("moon", 60.0), ("saturn", 210.0)]);
        let graph = build_aspect_graph(&aspects);
        let yods = detect_yods(&graph, &aspects, &bodies).unwrap();
        assert_eq!(yods.len(), 1);
        assert_eq!(yods[0].focal_planet, "saturn");
        assert_eq!(yods[0].base_planets, ["moon".to_string(), "sun".to_string()]);
        assert_eq!(yods[0].strength, 0.64);
    }

    #[test]
    fn test_quincunxes_without_sextile_base() {
        let (bodies, aspects) = chart(&[("sun", 0.0), ("moon", 90.0), ("saturn", 210.0)]);
        let graph = build_aspect_graph(&aspects);
        assert!(detect_yods(&graph, &aspects, &bodies).unwrap().is_empty());
    }
}
