//! Pattern significance heuristics.
//!
//! Each pattern starts from a base score and gains a fixed step for every
//! personal planet among its members.

use crate::aspects::strength::round3;

pub const PERSONAL_PLANETS: &[&str] = &["sun", "moon", "mercury", "venus", "mars"];

pub fn personal_planet_count<S: AsRef<str>>(planets: &[S]) -> usize {
    planets
        .iter()
        .filter(|p| PERSONAL_PLANETS.contains(&p.as_ref()))
        .count()
}

fn weighted(base: f64, step: f64, planets: &[&str]) -> f64 {
    round3(base + step * personal_planet_count(planets) as f64)
}

pub fn t_square_strength(focal: &str, base: [&str; 2]) -> f64 {
    weighted(0.5, 0.1, &[focal, base[0], base[1]])
}

pub fn grand_trine_strength(planets: [&str; 3]) -> f64 {
    weighted(0.6, 0.08, &planets)
}

pub fn grand_cross_strength(planets: [&str; 4]) -> f64 {
    weighted(0.7, 0.075, &planets)
}

pub fn yod_strength(focal: &str, base: [&str; 2]) -> f64 {
    weighted(0.4, 0.12, &[focal, base[0], base[1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_planet_count() {
        assert_eq!(personal_planet_count(&["sun", "saturn", "mars"]), 2);
        assert_eq!(personal_planet_count(&["pluto", "chiron"]), 0);
    }

    #[test]
    fn test_strength_steps() {
        assert_eq!(t_square_strength("sun", ["moon", "mars"]), 0.8);
        assert_eq!(t_square_strength("pluto", ["uranus", "neptune"]), 0.5);
        assert_eq!(grand_trine_strength(["sun", "jupiter", "saturn"]), 0.68);
        assert_eq!(grand_cross_strength(["sun", "moon", "mars", "venus"]), 1.0);
        assert_eq!(yod_strength("saturn", ["sun", "moon"]), 0.64);
    }
}
