use natal_aspects::aspects::{AspectKind, AspectTable};
use natal_aspects::patterns::{PatternDetector, PatternSettings};
use natal_aspects::AspectCalculator;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Aspect table and pattern tunables loaded from `configs/aspects.toml`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartConfig {
    pub aspects: AspectTable,
    pub patterns: PatternSettings,
}

impl ChartConfig {
    pub fn aspect_calculator(&self) -> AspectCalculator {
        AspectCalculator::with_table(self.aspects.clone())
    }

    pub fn pattern_detector(&self) -> PatternDetector {
        PatternDetector::with_settings(self.patterns)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartConfigToml {
    #[serde(default)]
    fallback_orb: Option<f64>,
    #[serde(default)]
    fallback_weight: Option<f64>,
    #[serde(default)]
    orbs: BTreeMap<String, f64>,
    #[serde(default)]
    weights: BTreeMap<String, f64>,
    #[serde(default)]
    patterns: Option<PatternsToml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternsToml {
    #[serde(default)]
    stellium_orb: Option<f64>,
}

/// Try the common relative paths for `configs/aspects.toml`: the workspace
/// root (binaries run from the repo) and two levels up (tests and benches
/// run from `crates/<name>`).
pub fn read_config_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/aspects.toml", "../../configs/aspects.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load aspects.toml from {:?}", paths);
}

pub fn load_default_chart_config() -> anyhow::Result<ChartConfig> {
    let text = read_config_toml_text()?;
    parse_chart_config(&text)
}

pub fn load_chart_config(path: &Path) -> anyhow::Result<ChartConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_chart_config(&text)
}

/// Parse TOML text. Every section is optional; missing values keep the
/// built-in defaults.
pub fn parse_chart_config(text: &str) -> anyhow::Result<ChartConfig> {
    let root: ChartConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse aspects.toml: {e}"))?;

    let mut table = AspectTable::default();
    if let Some(orb) = root.fallback_orb {
        table.fallback_orb = positive("fallback_orb", orb)?;
    }
    if let Some(weight) = root.fallback_weight {
        table.fallback_weight = finite("fallback_weight", weight)?;
    }
    for (name, orb) in &root.orbs {
        let kind = aspect_kind(name)?;
        table = table.with_orb(kind, positive(&format!("orbs.{name}"), *orb)?);
    }
    for (name, weight) in &root.weights {
        let kind = aspect_kind(name)?;
        table = table.with_weight(kind, finite(&format!("weights.{name}"), *weight)?);
    }

    let mut patterns = PatternSettings::default();
    if let Some(orb) = root.patterns.and_then(|p| p.stellium_orb) {
        patterns.stellium_orb = positive("patterns.stellium_orb", orb)?;
    }

    log::debug!(
        "Loaded chart config: {} orb overrides, {} weight overrides",
        root.orbs.len(),
        root.weights.len()
    );
    Ok(ChartConfig {
        aspects: table,
        patterns,
    })
}

fn aspect_kind(name: &str) -> anyhow::Result<AspectKind> {
    name.parse::<AspectKind>()
        .map_err(|e| anyhow::anyhow!("Invalid aspect name in aspects.toml: {e}"))
}

fn finite(key: &str, value: f64) -> anyhow::Result<f64> {
    if !value.is_finite() {
        anyhow::bail!("{key} must be a finite number, got {value}");
    }
    Ok(value)
}

fn positive(key: &str, value: f64) -> anyhow::Result<f64> {
    let value = finite(key, value)?;
    if value <= 0.0 {
        anyhow::bail!("{key} must be positive, got {value}");
    }
    Ok(value)
}
