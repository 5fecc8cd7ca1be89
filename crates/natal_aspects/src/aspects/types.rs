use crate::error::AspectError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The eight recognised aspect kinds, in classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectKind {
    Conjunction,
    SemiSextile,
    SemiSquare,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// Classification order: conjunction is tried first, opposition last.
    pub const ALL: [AspectKind; 8] = [
        AspectKind::Conjunction,
        AspectKind::SemiSextile,
        AspectKind::SemiSquare,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Quincunx,
        AspectKind::Opposition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::SemiSextile => "semi-sextile",
            AspectKind::SemiSquare => "semi-square",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Quincunx => "quincunx",
            AspectKind::Opposition => "opposition",
        }
    }

    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::SemiSextile => 30.0,
            AspectKind::SemiSquare => 45.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn default_orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 8.0,
            AspectKind::SemiSextile => 2.0,
            AspectKind::SemiSquare => 2.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Square => 7.0,
            AspectKind::Trine => 8.0,
            AspectKind::Quincunx => 2.0,
            AspectKind::Opposition => 8.0,
        }
    }

    /// Importance weight applied by the strength scorer
    pub fn default_weight(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 1.0,
            AspectKind::Opposition => 0.9,
            AspectKind::Trine => 0.8,
            AspectKind::Square => 0.8,
            AspectKind::Sextile => 0.6,
            AspectKind::Quincunx => 0.4,
            AspectKind::SemiSquare => 0.3,
            AspectKind::SemiSextile => 0.2,
        }
    }

    /// Kinds that become edges of the aspect graph. Sextile and the minor
    /// aspects are left out.
    pub fn is_graph_kind(&self) -> bool {
        matches!(
            self,
            AspectKind::Square
                | AspectKind::Trine
                | AspectKind::Opposition
                | AspectKind::Quincunx
                | AspectKind::Conjunction
        )
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectKind {
    type Err = AspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        AspectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| AspectError::invalid(format!("unknown aspect kind: {}", s)))
    }
}

/// An aspect between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Body names in discovery order
    pub between: [String; 2],
    pub aspect: AspectKind,
    /// Measured separation in degrees (0-180)
    pub angle: f64,
    /// Deviation from the exact aspect angle
    pub orb: f64,
    /// Importance score (0-1)
    pub strength: f64,
}

impl Aspect {
    pub fn involves(&self, name: &str) -> bool {
        self.between[0] == name || self.between[1] == name
    }

    /// True if this aspect joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.between[0] == a && self.between[1] == b)
            || (self.between[0] == b && self.between[1] == a)
    }
}

/// One row of the aspect table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
    pub weight: f64,
}

impl From<AspectKind> for AspectDefinition {
    fn from(kind: AspectKind) -> Self {
        Self {
            kind,
            angle: kind.exact_angle(),
            orb: kind.default_orb(),
            weight: kind.default_weight(),
        }
    }
}

/// Angles, orbs and weights used by the classifier and the strength scorer.
///
/// Definitions are kept in classification order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectTable {
    pub definitions: Vec<AspectDefinition>,
    /// Orb for a kind missing from a per-call orb override
    pub fallback_orb: f64,
    /// Weight for an aspect name the table does not know
    pub fallback_weight: f64,
}

impl Default for AspectTable {
    fn default() -> Self {
        Self {
            definitions: AspectKind::ALL.iter().copied().map(AspectDefinition::from).collect(),
            fallback_orb: 5.0,
            fallback_weight: 0.5,
        }
    }
}

impl AspectTable {
    pub fn definition(&self, kind: AspectKind) -> Option<&AspectDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.definition(kind).map(|d| d.orb).unwrap_or(self.fallback_orb)
    }

    /// Weight for an aspect name; unknown names get the fallback weight.
    pub fn weight_for(&self, kind: &str) -> f64 {
        kind.parse::<AspectKind>()
            .ok()
            .and_then(|k| self.definition(k))
            .map(|d| d.weight)
            .unwrap_or(self.fallback_weight)
    }

    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        if let Some(def) = self.definitions.iter_mut().find(|d| d.kind == kind) {
            def.orb = orb;
        }
        self
    }

    pub fn with_weight(mut self, kind: AspectKind, weight: f64) -> Self {
        if let Some(def) = self.definitions.iter_mut().find(|d| d.kind == kind) {
            def.weight = weight;
        }
        self
    }
}

lazy_static::lazy_static! {
    /// Built-in table, shared read-only by every default calculator
    pub static ref DEFAULT_ASPECT_TABLE: AspectTable = AspectTable::default();
}

/// Per-call settings for aspect calculations
#[derive(Debug, Clone, Default)]
pub struct AspectSettings {
    /// Replaces the table orbs when set; kinds missing from the map use
    /// the table's fallback orb
    pub orb_settings: Option<HashMap<AspectKind, f64>>,
    /// Body names to include (empty = all). Unknown names are ignored.
    pub include_objects: Vec<String>,
}

impl AspectSettings {
    pub fn including<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            orb_settings: None,
            include_objects: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_orbs(mut self, orbs: HashMap<AspectKind, f64>) -> Self {
        self.orb_settings = Some(orbs);
        self
    }

    /// Orb in effect for `kind` under these settings
    pub fn orb_for(&self, kind: AspectKind, table: &AspectTable) -> f64 {
        match &self.orb_settings {
            Some(orbs) => orbs.get(&kind).copied().unwrap_or(table.fallback_orb),
            None => table.orb_for(kind),
        }
    }
}
