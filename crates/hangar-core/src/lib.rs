pub mod footprint;
pub mod geom;
pub mod grid;
pub mod history;
pub mod units;

pub use footprint::{Cube, Hangar, PlanPoint};
pub use grid::{GridError, GridUnit};
pub use history::History;
