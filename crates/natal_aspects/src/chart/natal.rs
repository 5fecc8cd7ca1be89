use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::chart::points;
use crate::ephemeris::{Bodies, ChartRequest, EphemerisError, HouseCusps, PositionProvider};
use crate::error::AspectError;
use crate::patterns::{AspectPatterns, PatternDetector};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while assembling a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("Aspect error: {0}")]
    Aspects(#[from] AspectError),
}

/// Which optional steps of chart assembly to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Derive the south node from the north node when missing
    pub include_nodes: bool,
    /// Add the Part of Fortune
    pub include_arabic_parts: bool,
    pub detect_patterns: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            include_nodes: true,
            include_arabic_parts: true,
            detect_patterns: true,
        }
    }
}

/// A fully assembled natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub request: ChartRequest,
    pub bodies: Bodies,
    pub houses: Option<HouseCusps>,
    pub aspects: Vec<Aspect>,
    /// None when pattern detection was switched off
    pub patterns: Option<AspectPatterns>,
}

/// Assembles natal charts from a position provider
#[derive(Debug, Clone, Default)]
pub struct ChartCalculator {
    aspects: AspectCalculator,
    patterns: PatternDetector,
    settings: AspectSettings,
    options: ChartOptions,
}

impl ChartCalculator {
    pub fn new(aspects: AspectCalculator, patterns: PatternDetector) -> Self {
        Self {
            aspects,
            patterns,
            settings: AspectSettings::default(),
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_aspect_settings(mut self, settings: AspectSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn calculate<P: PositionProvider + ?Sized>(
        &self,
        provider: &mut P,
        request: &ChartRequest,
    ) -> Result<NatalChart, ChartError> {
        let positions = provider.calc_positions(request)?;
        let mut bodies = positions.bodies;

        if self.options.include_nodes {
            points::add_south_node(&mut bodies);
        }
        if let Some(houses) = &positions.houses {
            points::add_angles(&mut bodies, houses);
        }
        if self.options.include_arabic_parts {
            points::add_part_of_fortune(&mut bodies);
        }

        let aspects = self.aspects.compute_aspects(&bodies, &self.settings)?;

        let patterns = if self.options.detect_patterns {
            Some(self.patterns.detect(&aspects, &bodies).patterns)
        } else {
            None
        };

        log::info!(
            "Assembled chart for {} with {} bodies and {} aspects",
            request.datetime,
            bodies.len(),
            aspects.len()
        );

        Ok(NatalChart {
            request: request.clone(),
            bodies,
            houses: positions.houses,
            aspects,
            patterns,
        })
    }
}
