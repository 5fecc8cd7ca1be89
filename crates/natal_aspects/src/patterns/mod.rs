pub mod grand_cross;
pub mod grand_trine;
pub mod stellium;
pub mod strength;
pub mod t_square;
pub mod types;
pub mod yod;

pub use grand_cross::{cross_cardinality, detect_grand_crosses, is_grand_cross};
pub use grand_trine::detect_grand_trines;
pub use stellium::detect_stelliums;
pub use t_square::{detect_t_squares, T_SQUARE_BODIES};
pub use types::{
    AspectPatterns, DetectorFailure, GrandCross, GrandTrine, PatternKind, PatternReport,
    PatternSettings, Stellium, TSquare, TrineElement, Yod,
};
pub use yod::detect_yods;

use crate::aspects::{build_aspect_graph, Aspect};
use crate::ephemeris::Bodies;
use crate::error::AspectError;

/// Runs the five pattern detectors over one chart
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    settings: PatternSettings,
}

impl PatternDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PatternSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PatternSettings {
        &self.settings
    }

    /// Detect every pattern family.
    ///
    /// Detectors are isolated from each other: one that fails contributes
    /// an empty list and a [`DetectorFailure`], the others still run.
    pub fn detect(&self, aspects: &[Aspect], bodies: &Bodies) -> PatternReport {
        let mut report = PatternReport::default();

        if aspects.is_empty() || bodies.is_empty() {
            let error = AspectError::invalid("pattern detection needs aspects and bodies");
            log::warn!("Skipping pattern detection: {}", error);
            report.failures.push(DetectorFailure {
                detector: None,
                error,
            });
            return report;
        }

        let graph = build_aspect_graph(aspects);
        let patterns = &mut report.patterns;
        let failures = &mut report.failures;

        patterns.t_squares = collect(PatternKind::TSquare, detect_t_squares(&graph), failures);
        patterns.grand_trines = collect(
            PatternKind::GrandTrine,
            detect_grand_trines(&graph, bodies),
            failures,
        );
        patterns.grand_crosses = collect(
            PatternKind::GrandCross,
            detect_grand_crosses(&graph, bodies),
            failures,
        );
        patterns.yods = collect(PatternKind::Yod, detect_yods(&graph, aspects, bodies), failures);
        patterns.stelliums = collect(
            PatternKind::Stellium,
            detect_stelliums(bodies, self.settings.stellium_orb),
            failures,
        );

        log::info!(
            "Detected {} aspect patterns ({} detectors failed)",
            report.patterns.total(),
            report.failures.len()
        );
        report
    }
}

fn collect<T>(
    kind: PatternKind,
    result: Result<Vec<T>, AspectError>,
    failures: &mut Vec<DetectorFailure>,
) -> Vec<T> {
    match result {
        Ok(found) => found,
        Err(error) => {
            log::warn!("Error detecting {} patterns: {}", kind, error);
            failures.push(DetectorFailure {
                detector: Some(kind),
                error,
            });
            Vec::new()
        }
    }
}

/// Detect aspect patterns with the default settings, dropping failures.
///
/// Never fails: a detector that cannot run leaves its list empty.
pub fn detect_aspect_patterns(aspects: &[Aspect], bodies: &Bodies) -> AspectPatterns {
    PatternDetector::new().detect(aspects, bodies).patterns
}
