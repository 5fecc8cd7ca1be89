use crate::error::AspectError;

/// Shortest arc between two longitudes, in [0, 180].
///
/// Fails on NaN or infinite input.
pub fn angle_difference(a: f64, b: f64) -> Result<f64, AspectError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(AspectError::invalid(format!(
            "angles must be finite numbers, got {} and {}",
            a, b
        )));
    }
    let diff = (a - b).abs() % 360.0;
    Ok(if diff > 180.0 { 360.0 - diff } else { diff })
}
