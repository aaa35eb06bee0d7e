use crate::footprint::PlanPoint;
use crate::units::{m_to_mm, mm_to_m};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid cell {axis} must be a positive finite length, got {value} mm")]
    InvalidCell { axis: &'static str, value: f64 },
}

/// Placement grid. Cell width runs along x, cell length along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridUnit {
    pub cell_width_mm: f64,
    pub cell_length_mm: f64,
}

impl Default for GridUnit {
    fn default() -> Self {
        Self {
            cell_width_mm: 5700.0,
            cell_length_mm: 6000.0,
        }
    }
}

impl GridUnit {
    pub fn new(cell_width_mm: f64, cell_length_mm: f64) -> Result<Self, GridError> {
        let grid = Self {
            cell_width_mm,
            cell_length_mm,
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        for (axis, value) in [("width", self.cell_width_mm), ("length", self.cell_length_mm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidCell { axis, value });
            }
        }
        Ok(())
    }

    pub fn cell_width_m(&self) -> f64 {
        mm_to_m(self.cell_width_mm)
    }

    pub fn cell_length_m(&self) -> f64 {
        mm_to_m(self.cell_length_mm)
    }

    pub fn snap_x(&self, x_m: f64) -> f64 {
        snap(x_m, self.cell_width_mm)
    }

    pub fn snap_z(&self, z_m: f64) -> f64 {
        snap(z_m, self.cell_length_mm)
    }

    pub fn snap_point(&self, point: PlanPoint) -> PlanPoint {
        PlanPoint::new(self.snap_x(point.x), self.snap_z(point.z))
    }

    /// Whole cells along x covering `width_m`, never fewer than one.
    pub fn cells_x(&self, width_m: f64) -> u32 {
        whole_cells(width_m, self.cell_width_mm)
    }

    /// Whole cells along z covering `depth_m`, never fewer than one.
    pub fn cells_z(&self, depth_m: f64) -> u32 {
        whole_cells(depth_m, self.cell_length_mm)
    }
}

fn snap(value_m: f64, cell_mm: f64) -> f64 {
    mm_to_m((m_to_mm(value_m) / cell_mm).round() * cell_mm)
}

fn whole_cells(value_m: f64, cell_mm: f64) -> u32 {
    let cells = (m_to_mm(value_m) / cell_mm).round();
    if cells.is_finite() && cells >= 1.0 {
        cells as u32
    } else {
        1
    }
}
