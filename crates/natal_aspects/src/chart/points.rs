use crate::ephemeris::{Bodies, Body, HouseCusps};
use crate::western::normalize_degrees;

/// The south node sits opposite the north node.
pub fn south_node(north_node: f64) -> f64 {
    normalize_degrees(north_node + 180.0)
}

/// Part of Fortune, day formula: ascendant + moon - sun.
pub fn part_of_fortune(sun: f64, moon: f64, ascendant: f64) -> f64 {
    normalize_degrees(ascendant + moon - sun)
}

fn longitude_of(bodies: &Bodies, name: &str) -> Option<f64> {
    bodies.get(name).and_then(|b| b.longitude)
}

/// Add `south_node` when only the north node was provided.
pub(crate) fn add_south_node(bodies: &mut Bodies) {
    if bodies.contains_key("south_node") {
        return;
    }
    let Some(north) = bodies.get("north_node") else {
        return;
    };
    let Some(lon) = north.longitude else {
        return;
    };
    let mut south = Body::at(south_node(lon));
    south.retrograde = north.retrograde;
    bodies.insert("south_node".to_string(), south);
}

/// Add the chart angles as bodies so they take part in aspects.
pub(crate) fn add_angles(bodies: &mut Bodies, houses: &HouseCusps) {
    bodies
        .entry("ascendant".to_string())
        .or_insert_with(|| Body::at(houses.ascendant));
    bodies
        .entry("midheaven".to_string())
        .or_insert_with(|| Body::at(houses.midheaven));
}

pub(crate) fn add_part_of_fortune(bodies: &mut Bodies) {
    let (Some(sun), Some(moon), Some(asc)) = (
        longitude_of(bodies, "sun"),
        longitude_of(bodies, "moon"),
        longitude_of(bodies, "ascendant"),
    ) else {
        log::debug!("Part of Fortune needs sun, moon and ascendant; skipping");
        return;
    };
    bodies.insert(
        "part_of_fortune".to_string(),
        Body::at(part_of_fortune(sun, moon, asc)),
    );
}
