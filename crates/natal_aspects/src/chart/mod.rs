pub mod natal;
pub mod points;

pub use natal::{ChartCalculator, ChartError, ChartOptions, NatalChart};
pub use points::{part_of_fortune, south_node};
