use crate::aspects::angle_difference;
use crate::ephemeris::Bodies;
use crate::error::AspectError;
use crate::patterns::types::Stellium;
use std::collections::HashSet;

/// Greedy sweep over bodies sorted by longitude.
///
/// Each unclaimed body seeds a cluster that absorbs following bodies while
/// they stay within `orb` of the seed; the first body out of range ends
/// the sweep for that seed. Clusters of three or more become stelliums and
/// their members cannot seed or join another cluster. Bodies whose
/// longitude is not finite are left out of the sweep.
pub fn detect_stelliums(bodies: &Bodies, orb: f64) -> Result<Vec<Stellium>, AspectError> {
    let mut positions = bodies
        .iter()
        .map(|(name, body)| Ok((name.as_str(), body.require_longitude(name)?)))
        .collect::<Result<Vec<(&str, f64)>, AspectError>>()?;
    positions.retain(|(name, lon)| {
        if !lon.is_finite() {
            log::warn!("Skipping {} in stellium search: longitude {} is not finite", name, lon);
        }
        lon.is_finite()
    });
    positions.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut stelliums = Vec::new();
    let mut processed: HashSet<&str> = HashSet::new();

    for i in 0..positions.len() {
        let (seed, seed_lon) = positions[i];
        if processed.contains(seed) {
            continue;
        }

        let mut cluster = vec![positions[i]];
        for &(name, lon) in &positions[i + 1..] {
            if processed.contains(name) {
                continue;
            }
            if angle_difference(seed_lon, lon)? <= orb {
                cluster.push((name, lon));
            } else {
                break;
            }
        }

        if cluster.len() >= 3 {
            processed.extend(cluster.iter().map(|(name, _)| *name));
            let last_lon = cluster[cluster.len() - 1].1;
            stelliums.push(Stellium {
                planets: cluster.iter().map(|(name, _)| name.to_string()).collect(),
                sign: bodies[seed].require_sign(seed)?.to_string(),
                orb_range: angle_difference(seed_lon, last_lon)?,
            });
        }
    }

    Ok(stelliums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::Body;

    fn bodies(entries: &[(&str, f64)]) -> Bodies {
        entries
            .iter()
            .map(|(name, lon)| (name.to_string(), Body::at(*lon)))
            .collect()
    }

    #[test]
    fn test_tight_cluster() {
        let chart = bodies(&[
            ("sun", 10.0),
            ("mercury", 12.0),
            ("venus", 14.0),
            ("mars", 16.0),
            ("moon", 18.0),
            ("jupiter", 27.0),
            ("saturn", 36.0),
        ]);
        let stelliums = detect_stelliums(&chart, 8.0).unwrap();
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].planets, vec!["sun", "mercury", "venus", "mars", "moon"]);
        assert_eq!(stelliums[0].sign, "Aries");
        assert_eq!(stelliums[0].orb_range, 8.0);
    }

    #[test]
    fn test_sweep_breaks_on_first_miss() {
        // "d" is 10° from the seed but 2° from "c"; once a-b-c is claimed
        // only "d" and "e" remain, too few for a second cluster.
        let chart = bodies(&[("a", 100.0), ("b", 104.0), ("c", 108.0), ("d", 110.0), ("e", 113.0)]);
        let stelliums = detect_stelliums(&chart, 8.0).unwrap();
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].planets, vec!["a", "b", "c"]);
        assert_eq!(stelliums[0].orb_range, 8.0);
    }

    #[test]
    fn test_members_are_not_reused() {
        let chart = bodies(&[("a", 0.0), ("b", 3.0), ("c", 6.0), ("d", 9.0), ("e", 12.0)]);
        let stelliums = detect_stelliums(&chart, 8.0).unwrap();
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].planets, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_finite_longitude_is_skipped() {
        let mut chart = bodies(&[("sun", 10.0), ("mercury", 12.0), ("venus", 14.0)]);
        chart.insert("pluto".to_string(), Body::bare(f64::NAN));
        let stelliums = detect_stelliums(&chart, 8.0).unwrap();
        assert_eq!(stelliums.len(), 1);
        assert_eq!(stelliums[0].planets, vec!["sun", "mercury", "venus"]);
    }

    #[test]
    fn test_missing_sign_fails() {
        let mut chart = bodies(&[("b", 3.0), ("c", 6.0)]);
        chart.insert("a".to_string(), Body::bare(0.0));
        let err = detect_stelliums(&chart, 8.0).unwrap_err();
        assert!(matches!(err, AspectError::MissingField { ref field, .. } if field == "sign"));
    }
}
