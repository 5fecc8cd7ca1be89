use crate::aspects::geometry::angle_difference;
use crate::aspects::types::{Aspect, AspectSettings, AspectTable, DEFAULT_ASPECT_TABLE};
use crate::ephemeris::types::Bodies;
use crate::error::AspectError;
use std::collections::HashSet;

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    table: AspectTable,
}

impl AspectCalculator {
    /// Calculator using the built-in aspect table
    pub fn new() -> Self {
        Self::with_table(DEFAULT_ASPECT_TABLE.clone())
    }

    pub fn with_table(table: AspectTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AspectTable {
        &self.table
    }

    /// Compute aspects between every pair of bodies in one chart.
    ///
    /// Each pair yields at most one aspect: the first kind in table order
    /// whose orb admits the separation. A pair that cannot be scored is
    /// logged and skipped.
    pub fn compute_aspects(
        &self,
        bodies: &Bodies,
        settings: &AspectSettings,
    ) -> Result<Vec<Aspect>, AspectError> {
        if bodies.is_empty() {
            return Err(AspectError::invalid("bodies must be a non-empty map"));
        }
        let candidates = filter_included(longitudes(bodies)?, &settings.include_objects);

        if candidates.len() < 2 {
            log::warn!(
                "Less than 2 bodies available for aspect calculation ({} after filtering)",
                candidates.len()
            );
            return Ok(Vec::new());
        }

        let mut aspects = Vec::new();
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                let (name1, lon1) = candidates[i];
                let (name2, lon2) = candidates[j];
                match self.calculate_aspect(name1, lon1, name2, lon2, settings) {
                    Ok(Some(aspect)) => aspects.push(aspect),
                    Ok(None) => {}
                    Err(e) => {
                        log::warn!("Skipping aspect between {} and {}: {}", name1, name2, e);
                    }
                }
            }
        }

        log::info!("Calculated {} aspects", aspects.len());
        Ok(aspects)
    }

    /// Compute aspects between the bodies of two charts.
    ///
    /// Every body of `bodies_a` is paired with every body of `bodies_b`,
    /// including bodies that share a name.
    pub fn compute_inter_chart_aspects(
        &self,
        bodies_a: &Bodies,
        bodies_b: &Bodies,
        settings: &AspectSettings,
    ) -> Result<Vec<Aspect>, AspectError> {
        let candidates_a = filter_included(longitudes(bodies_a)?, &settings.include_objects);
        let candidates_b = filter_included(longitudes(bodies_b)?, &settings.include_objects);

        let mut aspects = Vec::new();
        for &(name1, lon1) in &candidates_a {
            for &(name2, lon2) in &candidates_b {
                match self.calculate_aspect(name1, lon1, name2, lon2, settings) {
                    Ok(Some(aspect)) => aspects.push(aspect),
                    Ok(None) => {}
                    Err(e) => {
                        log::warn!("Skipping inter-chart aspect between {} and {}: {}", name1, name2, e);
                    }
                }
            }
        }

        log::info!("Calculated {} inter-chart aspects", aspects.len());
        Ok(aspects)
    }

    /// Classify the separation between two longitudes.
    ///
    /// Returns `Ok(None)` when no aspect kind matches.
    pub fn calculate_aspect(
        &self,
        name1: &str,
        lon1: f64,
        name2: &str,
        lon2: f64,
        settings: &AspectSettings,
    ) -> Result<Option<Aspect>, AspectError> {
        let separation = angle_difference(lon1, lon2)?;

        for def in &self.table.definitions {
            let max_orb = settings.orb_for(def.kind, &self.table);
            let orb = (separation - def.angle).abs();
            if orb <= max_orb {
                let strength = self.table.strength(orb, max_orb, def.kind.as_str())?;
                return Ok(Some(Aspect {
                    between: [name1.to_string(), name2.to_string()],
                    aspect: def.kind,
                    angle: separation,
                    orb,
                    strength,
                }));
            }
        }

        Ok(None)
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute aspects for one chart with the built-in aspect table
pub fn compute_aspects(bodies: &Bodies, settings: &AspectSettings) -> Result<Vec<Aspect>, AspectError> {
    AspectCalculator::new().compute_aspects(bodies, settings)
}

/// Every body must carry a longitude, filtered out or not.
fn longitudes(bodies: &Bodies) -> Result<Vec<(&str, f64)>, AspectError> {
    bodies
        .iter()
        .map(|(name, body)| Ok((name.as_str(), body.require_longitude(name)?)))
        .collect()
}

fn filter_included<'a>(candidates: Vec<(&'a str, f64)>, include: &[String]) -> Vec<(&'a str, f64)> {
    if include.is_empty() {
        return candidates;
    }
    let include_set: HashSet<&str> = include.iter().map(|s| s.as_str()).collect();
    candidates
        .into_iter()
        .filter(|(name, _)| include_set.contains(name))
        .collect()
}
