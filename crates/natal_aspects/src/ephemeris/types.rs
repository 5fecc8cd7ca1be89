use crate::error::AspectError;
use crate::western::sign_position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// A point plotted on the chart, as delivered by the position provider.
///
/// Only the longitude is read by the aspect classifier. `sign` is read by
/// stellium detection; everything else is payload for the export layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Ecliptic longitude in degrees (0-360)
    #[serde(
        rename = "ecliptic_longitude_deg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<f64>,
    /// Zodiac sign name ("Aries".."Pisces")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree_in_sign: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrograde: Option<bool>,
}

impl Body {
    /// Body at `longitude` with sign and degree-in-sign filled in.
    pub fn at(longitude: f64) -> Self {
        let (sign, degree) = sign_position(longitude);
        Self {
            longitude: Some(crate::western::normalize_degrees(longitude)),
            sign: Some(sign.name().to_string()),
            degree_in_sign: Some(degree),
            retrograde: None,
        }
    }

    /// Body carrying only a longitude, with no enriched attributes.
    pub fn bare(longitude: f64) -> Self {
        Self {
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = Some(retrograde);
        self
    }

    pub fn require_longitude(&self, name: &str) -> Result<f64, AspectError> {
        self.longitude
            .ok_or_else(|| AspectError::missing(name, "ecliptic_longitude_deg"))
    }

    pub fn require_sign(&self, name: &str) -> Result<&str, AspectError> {
        self.sign
            .as_deref()
            .ok_or_else(|| AspectError::missing(name, "sign"))
    }
}

/// Body name -> body. Iteration order is the name order, which fixes the
/// pair enumeration order of every search in this crate.
pub type Bodies = BTreeMap<String, Body>;

/// House cusps and angles from the external house provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// House system name
    pub system: String,
    /// Cusp longitudes for houses 1-12
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// Complete position data for one chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerPositions {
    pub bodies: Bodies,
    /// None if no location was provided
    pub houses: Option<HouseCusps>,
}

/// Settings for ephemeris calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Zodiac type: "tropical" or "sidereal"
    pub zodiac_type: String,
    /// Ayanamsa name (for sidereal zodiac)
    pub ayanamsa: Option<String>,
    /// House system name
    pub house_system: String,
    /// Body IDs to include (empty = everything the provider knows)
    pub include_objects: Vec<String>,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            zodiac_type: "tropical".to_string(),
            ayanamsa: None,
            house_system: "placidus".to_string(),
            include_objects: Vec::new(),
        }
    }
}

/// What a chart is calculated for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub datetime: DateTime<Utc>,
    pub location: Option<GeoLocation>,
    pub settings: EphemerisSettings,
}
