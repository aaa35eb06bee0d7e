use crate::error::{Result, SectionError};
use hangar_core::geom::{BBox2, Vec2};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Points closer than this are merged when a polygon is built.
pub const POINT_EPSILON: f64 = 1e-9;

/// Closed loop of at least three points; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Result<Self> {
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(SectionError::MalformedPolygon(format!(
                "non-finite vertex ({}, {})",
                bad.x, bad.y
            )));
        }

        let mut points = points;
        points.dedup_by(|a, b| a.distance(*b) <= POINT_EPSILON);
        while points.len() > 1 && points[0].distance(points[points.len() - 1]) <= POINT_EPSILON {
            points.pop();
        }

        if points.len() < 3 {
            return Err(SectionError::MalformedPolygon(format!(
                "need at least 3 distinct vertices, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    pub fn rect(min: Vec2, max: Vec2) -> Result<Self> {
        Self::new(vec![
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    pub fn to_ccw(&self) -> Self {
        if self.signed_area() < 0.0 {
            self.reversed()
        } else {
            self.clone()
        }
    }

    pub fn bbox(&self) -> BBox2 {
        BBox2::from_points(self.points.iter().copied())
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| *p * factor).collect(),
        }
    }
}

pub(crate) fn signed_area(points: &[Vec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    points
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .map(|(a, b)| a.cross(*b))
        .sum::<f64>()
        * 0.5
}

/// Outer boundary plus the holes cut out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonSet {
    pub outer: Polygon,
    pub holes: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(outer: Polygon, holes: Vec<Polygon>) -> Self {
        Self { outer, holes }
    }

    pub fn contours(&self) -> impl Iterator<Item = &Polygon> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Outer area minus hole areas.
    pub fn area(&self) -> f64 {
        self.outer.area() - self.holes.iter().map(Polygon::area).sum::<f64>()
    }

    pub fn bbox(&self) -> BBox2 {
        self.outer.bbox()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            outer: self.outer.scaled(factor),
            holes: self.holes.iter().map(|h| h.scaled(factor)).collect(),
        }
    }
}
