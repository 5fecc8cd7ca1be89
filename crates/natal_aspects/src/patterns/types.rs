use crate::error::AspectError;
use crate::western::Modality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five detected pattern families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    TSquare,
    GrandTrine,
    GrandCross,
    Yod,
    Stellium,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::TSquare,
        PatternKind::GrandTrine,
        PatternKind::GrandCross,
        PatternKind::Yod,
        PatternKind::Stellium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::TSquare => "T-square",
            PatternKind::GrandTrine => "Grand Trine",
            PatternKind::GrandCross => "Grand Cross",
            PatternKind::Yod => "Yod",
            PatternKind::Stellium => "Stellium",
        }
    }

    /// Key of this family in the pattern report
    pub fn report_key(&self) -> &'static str {
        match self {
            PatternKind::TSquare => "t_squares",
            PatternKind::GrandTrine => "grand_trines",
            PatternKind::GrandCross => "grand_crosses",
            PatternKind::Yod => "yods",
            PatternKind::Stellium => "stelliums",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two bodies in opposition, both square to a focal body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "T-square")]
pub struct TSquare {
    pub focal_planet: String,
    pub opposition: [String; 2],
    pub strength: f64,
}

/// Coarse element tag of a Grand Trine, from the longitude of its first member.
///
/// 0-120° is Fire, 120-240° is Earth, everything else Air/Water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrineElement {
    Fire,
    Earth,
    #[serde(rename = "Air/Water")]
    AirWater,
}

impl TrineElement {
    pub fn from_longitude(longitude: f64) -> Self {
        let deg = crate::western::normalize_degrees(longitude);
        if deg < 120.0 {
            TrineElement::Fire
        } else if deg < 240.0 {
            TrineElement::Earth
        } else {
            TrineElement::AirWater
        }
    }
}

/// Three bodies mutually in trine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Grand Trine")]
pub struct GrandTrine {
    pub planets: [String; 3],
    pub element: TrineElement,
    pub strength: f64,
}

/// Four bodies with exactly four squares and two oppositions among them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Grand Cross")]
pub struct GrandCross {
    pub planets: [String; 4],
    pub cardinality: Modality,
    pub strength: f64,
}

/// A focal body quincunx to two bodies that are sextile to each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Yod")]
pub struct Yod {
    pub focal_planet: String,
    pub base_planets: [String; 2],
    pub strength: f64,
}

/// Three or more bodies clustered within the stellium orb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Stellium")]
pub struct Stellium {
    pub planets: Vec<String>,
    /// Sign of the lowest-longitude member
    pub sign: String,
    /// Arc from the first to the last member
    pub orb_range: f64,
}

/// Patterns found in one chart, one list per family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectPatterns {
    pub t_squares: Vec<TSquare>,
    pub grand_trines: Vec<GrandTrine>,
    pub grand_crosses: Vec<GrandCross>,
    pub yods: Vec<Yod>,
    pub stelliums: Vec<Stellium>,
}

impl AspectPatterns {
    pub fn total(&self) -> usize {
        self.t_squares.len()
            + self.grand_trines.len()
            + self.grand_crosses.len()
            + self.yods.len()
            + self.stelliums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, kind: PatternKind) -> usize {
        match kind {
            PatternKind::TSquare => self.t_squares.len(),
            PatternKind::GrandTrine => self.grand_trines.len(),
            PatternKind::GrandCross => self.grand_crosses.len(),
            PatternKind::Yod => self.yods.len(),
            PatternKind::Stellium => self.stelliums.len(),
        }
    }
}

/// Why a detector (or the whole run, when `detector` is None) produced nothing
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorFailure {
    pub detector: Option<PatternKind>,
    pub error: AspectError,
}

/// Detection result with the failures kept for inspection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternReport {
    pub patterns: AspectPatterns,
    pub failures: Vec<DetectorFailure>,
}

impl PatternReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_for(&self, kind: PatternKind) -> Option<&AspectError> {
        self.failures
            .iter()
            .find(|f| f.detector == Some(kind))
            .map(|f| &f.error)
    }
}

/// Tunables for pattern detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSettings {
    /// Maximum arc from a stellium's first member, in degrees
    pub stellium_orb: f64,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self { stellium_orb: 8.0 }
    }
}
