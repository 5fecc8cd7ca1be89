//! Natal chart aspects and aspect-pattern detection.
//!
//! Bodies come from an external position provider as ecliptic longitudes.
//! The [`aspects`] module classifies every pair into at most one aspect,
//! and the [`patterns`] module searches the resulting aspect graph for
//! T-squares, Grand Trines, Grand Crosses, Yods and Stelliums.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod patterns;
pub mod western;

pub use aspects::{
    angle_difference, calculate_aspect_strength, compute_aspects, Aspect, AspectCalculator,
    AspectGraph, AspectKind, AspectSettings, AspectTable,
};
pub use chart::{ChartCalculator, ChartError, ChartOptions, NatalChart};
pub use ephemeris::{Bodies, Body, ChartRequest, PositionProvider, StaticPositions};
pub use error::AspectError;
pub use patterns::{detect_aspect_patterns, AspectPatterns, PatternDetector, PatternReport};
