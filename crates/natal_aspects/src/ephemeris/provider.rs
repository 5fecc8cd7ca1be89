use crate::ephemeris::types::{ChartRequest, LayerPositions};
use thiserror::Error;

/// Errors that can occur while obtaining positions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {body}: {message}")]
    CalculationFailed { body: String, message: String },
}

/// Source of body longitudes and house cusps for a chart.
///
/// Raw ephemeris work lives behind this trait; the engine only consumes
/// the resulting longitudes.
pub trait PositionProvider {
    fn calc_positions(&mut self, request: &ChartRequest) -> Result<LayerPositions, EphemerisError>;
}

/// Provider backed by positions the caller already holds
#[derive(Debug, Clone, Default)]
pub struct StaticPositions {
    positions: LayerPositions,
}

impl StaticPositions {
    pub fn new(positions: LayerPositions) -> Self {
        Self { positions }
    }
}

impl PositionProvider for StaticPositions {
    fn calc_positions(&mut self, request: &ChartRequest) -> Result<LayerPositions, EphemerisError> {
        let include = &request.settings.include_objects;
        let mut bodies = self.positions.bodies.clone();
        if !include.is_empty() {
            bodies.retain(|name, _| include.iter().any(|id| id.eq_ignore_ascii_case(name)));
        }

        for (name, body) in &bodies {
            if let Some(lon) = body.longitude {
                if !lon.is_finite() {
                    return Err(EphemerisError::CalculationFailed {
                        body: name.clone(),
                        message: format!("non-finite longitude {}", lon),
                    });
                }
            }
        }

        // Houses need a location, same as a real ephemeris
        let houses = if request.location.is_some() {
            self.positions.houses.clone()
        } else {
            None
        };

        Ok(LayerPositions { bodies, houses })
    }
}
