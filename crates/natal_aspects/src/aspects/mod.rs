pub mod calculator;
pub mod geometry;
pub mod graph;
pub mod strength;
pub mod types;

pub use calculator::{compute_aspects, AspectCalculator};
pub use geometry::angle_difference;
pub use graph::{build_aspect_graph, AspectEdge, AspectGraph};
pub use strength::calculate_aspect_strength;
pub use types::{
    Aspect, AspectDefinition, AspectKind, AspectSettings, AspectTable, DEFAULT_ASPECT_TABLE,
};
