use crate::aspects::{AspectGraph, AspectKind};
use crate::ephemeris::Bodies;
use crate::error::AspectError;
use crate::patterns::strength::grand_trine_strength;
use crate::patterns::types::{GrandTrine, TrineElement};

/// Check every unordered triple of bodies for three mutual trines.
pub fn detect_grand_trines(graph: &AspectGraph, bodies: &Bodies) -> Result<Vec<GrandTrine>, AspectError> {
    let planets: Vec<&str> = bodies.keys().map(|k| k.as_str()).collect();
    let mut grand_trines = Vec::new();

    for i in 0..planets.len() {
        for j in (i + 1)..planets.len() {
            if !graph.has_aspect_between(planets[i], planets[j], AspectKind::Trine) {
                continue;
            }
            for k in (j + 1)..planets.len() {
                let (p1, p2, p3) = (planets[i], planets[j], planets[k]);
                if graph.has_aspect_between(p1, p3, AspectKind::Trine)
                    && graph.has_aspect_between(p2, p3, AspectKind::Trine)
                {
                    let longitude = bodies[p1].require_longitude(p1)?;
                    grand_trines.push(GrandTrine {
                        planets: [p1.to_string(), p2.to_string(), p3.to_string()],
                        element: TrineElement::from_longitude(longitude),
                        strength: grand_trine_strength([p1, p2, p3]),
                    });
                }
            }
        }
    }

    Ok(grand_trines)
}
