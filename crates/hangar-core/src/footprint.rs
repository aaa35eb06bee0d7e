use crate::geom::{BBox2, Vec2};
use crate::grid::GridUnit;
use crate::units::mm_to_m;
use serde::{Deserialize, Serialize};

/// Ground-plane point in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x: f64,
    pub z: f64,
}

impl PlanPoint {
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

/// Footprint given by four ordered corners:
/// `(x, z)`, `(x + w, z)`, `(x + w, z + d)`, `(x, z + d)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hangar {
    pub corners: [PlanPoint; 4],
}

impl Hangar {
    pub fn new(corners: [PlanPoint; 4]) -> Self {
        Self { corners }
    }

    pub fn from_cube(cube: &Cube) -> Self {
        let (x0, z0) = (cube.x, cube.z);
        let (x1, z1) = (cube.x + cube.width, cube.z + cube.depth);
        Self {
            corners: [
                PlanPoint::new(x0, z0),
                PlanPoint::new(x1, z0),
                PlanPoint::new(x1, z1),
                PlanPoint::new(x0, z1),
            ],
        }
    }

    pub fn bbox(&self) -> BBox2 {
        BBox2::from_points(self.corners.iter().map(|c| c.as_vec2()))
    }
}

/// Footprint as an origin plus extent, all in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
}

impl Cube {
    pub const fn new(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self { x, z, width, depth }
    }

    /// One grid cell at the given snapped origin.
    pub fn unit(origin: PlanPoint, grid: &GridUnit) -> Self {
        let origin = grid.snap_point(origin);
        Self::new(origin.x, origin.z, grid.cell_width_m(), grid.cell_length_m())
    }

    /// Bounding box of the corners, so corner order does not matter.
    pub fn from_hangar(hangar: &Hangar) -> Self {
        let bbox = hangar.bbox();
        Self::new(bbox.min.x, bbox.min.y, bbox.width(), bbox.height())
    }

    pub fn snapped(&self, grid: &GridUnit) -> Self {
        let origin = grid.snap_point(PlanPoint::new(self.x, self.z));
        let cells_x = grid.cells_x(self.width);
        let cells_z = grid.cells_z(self.depth);
        Self::new(
            origin.x,
            origin.z,
            mm_to_m(f64::from(cells_x) * grid.cell_width_mm),
            mm_to_m(f64::from(cells_z) * grid.cell_length_mm),
        )
    }

    /// Translates by a drag delta, then snaps to the grid.
    pub fn moved(&self, dx: f64, dz: f64, grid: &GridUnit) -> Self {
        Self::new(self.x + dx, self.z + dz, self.width, self.depth).snapped(grid)
    }

    /// Grows or shrinks the far edges by a drag delta, then snaps to the grid.
    pub fn resized(&self, dw: f64, dd: f64, grid: &GridUnit) -> Self {
        Self::new(self.x, self.z, self.width + dw, self.depth + dd).snapped(grid)
    }

    pub fn cells(&self, grid: &GridUnit) -> (u32, u32) {
        (grid.cells_x(self.width), grid.cells_z(self.depth))
    }

    pub fn area_m2(&self) -> f64 {
        self.width.max(0.0) * self.depth.max(0.0)
    }

    pub fn to_hangar(&self) -> Hangar {
        Hangar::from_cube(self)
    }
}
