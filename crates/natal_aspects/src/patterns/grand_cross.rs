use crate::aspects::{AspectGraph, AspectKind};
use crate::ephemeris::Bodies;
use crate::error::AspectError;
use crate::patterns::strength::grand_cross_strength;
use crate::patterns::types::GrandCross;
use crate::western::{Modality, ZodiacSign};

/// Four bodies qualify when their six pairings hold exactly four squares
/// and two oppositions. The count does not check that the squares close
/// into a cycle.
pub fn is_grand_cross(graph: &AspectGraph, planets: [&str; 4]) -> bool {
    let mut squares = 0;
    let mut oppositions = 0;
    for i in 0..planets.len() {
        for j in (i + 1)..planets.len() {
            if graph.has_aspect_between(planets[i], planets[j], AspectKind::Square) {
                squares += 1;
            } else if graph.has_aspect_between(planets[i], planets[j], AspectKind::Opposition) {
                oppositions += 1;
            }
        }
    }
    squares == 4 && oppositions == 2
}

/// Majority modality of the members' signs; ties go to cardinal, then fixed.
pub fn cross_cardinality(longitudes: &[f64]) -> Modality {
    let mut counts = [(Modality::Cardinal, 0usize), (Modality::Fixed, 0), (Modality::Mutable, 0)];
    for &lon in longitudes {
        let sign = ZodiacSign::from_longitude(lon);
        if let Some(entry) = counts.iter_mut().find(|(m, _)| *m == sign.modality()) {
            entry.1 += 1;
        }
    }
    counts
        .iter()
        .fold((Modality::Cardinal, 0), |best, &(modality, n)| if n > best.1 { (modality, n) } else { best })
        .0
}

/// Check every unordered quadruple of bodies for the Grand Cross count.
pub fn detect_grand_crosses(graph: &AspectGraph, bodies: &Bodies) -> Result<Vec<GrandCross>, AspectError> {
    let planets: Vec<&str> = bodies.keys().map(|k| k.as_str()).collect();
    let n = planets.len();
    let mut grand_crosses = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                for l in (k + 1)..n {
                    let members = [planets[i], planets[j], planets[k], planets[l]];
                    if !is_grand_cross(graph, members) {
                        continue;
                    }
                    let longitudes = members
                        .iter()
                        .map(|name| bodies[*name].require_longitude(name))
                        .collect::<Result<Vec<f64>, AspectError>>()?;
                    grand_crosses.push(GrandCross {
                        planets: members.map(str::to_string),
                        cardinality: cross_cardinality(&longitudes),
                        strength: grand_cross_strength(members),
                    });
                }
            }
        }
    }

    Ok(grand_crosses)
}
