pub mod provider;
pub mod types;

pub use provider::{EphemerisError, PositionProvider, StaticPositions};
pub use types::{
    Bodies, Body, ChartRequest, EphemerisSettings, GeoLocation, HouseCusps, LayerPositions,
};
