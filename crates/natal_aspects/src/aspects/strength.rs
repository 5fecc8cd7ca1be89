use crate::aspects::types::{AspectTable, DEFAULT_ASPECT_TABLE};
use crate::error::AspectError;

/// Round to 3 decimal places
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Strength of an aspect from orb tightness and aspect importance, using
/// the built-in weights. See [`AspectTable::strength`].
pub fn calculate_aspect_strength(
    actual_orb: f64,
    max_orb: f64,
    kind: &str,
) -> Result<f64, AspectError> {
    DEFAULT_ASPECT_TABLE.strength(actual_orb, max_orb, kind)
}

impl AspectTable {
    /// Linear falloff from exact (1.0) to the edge of the orb (0.0),
    /// scaled by the kind's weight, clamped to [0, 1] and rounded to 3 decimals.
    pub fn strength(&self, actual_orb: f64, max_orb: f64, kind: &str) -> Result<f64, AspectError> {
        if !actual_orb.is_finite() || !max_orb.is_finite() {
            return Err(AspectError::invalid("orb values must be finite numbers"));
        }
        if max_orb <= 0.0 {
            return Err(AspectError::invalid(format!(
                "max orb must be positive, got {}",
                max_orb
            )));
        }

        let orb_strength = 1.0 - actual_orb.abs() / max_orb;
        let strength = (orb_strength * self.weight_for(kind)).clamp(0.0, 1.0);
        Ok(round3(strength))
    }
}
