use crate::aspects::{AspectGraph, AspectKind};
use crate::error::AspectError;
use crate::patterns::strength::t_square_strength;
use crate::patterns::types::TSquare;
use std::collections::HashSet;

/// Bodies considered for T-squares: the ten planets and the lunar nodes
pub const T_SQUARE_BODIES: &[&str] = &[
    "sun",
    "moon",
    "mercury",
    "venus",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
    "pluto",
    "north_node",
    "south_node",
];

/// Find every opposition whose two ends are both square to a third body.
///
/// Each opposition is seen from both of its endpoints, so the triple is
/// canonicalised and reported once.
pub fn detect_t_squares(graph: &AspectGraph) -> Result<Vec<TSquare>, AspectError> {
    let graph = graph.restricted_to(T_SQUARE_BODIES);
    let mut t_squares = Vec::new();
    let mut reported: HashSet<[String; 3]> = HashSet::new();

    let oppositions: Vec<(&str, &str)> = graph
        .nodes()
        .flat_map(|body| {
            graph
                .neighbors(body, AspectKind::Opposition)
                .map(move |other| (body, other))
        })
        .collect();

    for (body1, body2) in oppositions {
        let squares_to_body2: HashSet<&str> = graph.neighbors(body2, AspectKind::Square).collect();
        let mut focal_points: Vec<&str> = graph
            .neighbors(body1, AspectKind::Square)
            .filter(|focal| squares_to_body2.contains(focal))
            .collect();
        focal_points.sort_unstable();
        focal_points.dedup();

        for focal in focal_points {
            let mut config = [focal.to_string(), body1.to_string(), body2.to_string()];
            config.sort();
            if !reported.insert(config) {
                continue;
            }
            t_squares.push(TSquare {
                focal_planet: focal.to_string(),
                opposition: [body1.to_string(), body2.to_string()],
                strength: t_square_strength(focal, [body1, body2]),
            });
        }
    }

    Ok(t_squares)
}
