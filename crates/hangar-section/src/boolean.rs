//! Polygon booleans backed by `i_overlay`.

use crate::polygon::{Polygon, PolygonSet};
use hangar_core::geom::Vec2;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

/// Union of two polygon groups.
///
/// Each group is filled even-odd, so a hole is expressed by listing its loop
/// next to the outer loop that contains it. Every resulting shape becomes one
/// `PolygonSet`.
pub fn union(subject: &[Polygon], clip: &[Polygon]) -> Vec<PolygonSet> {
    overlay(subject, clip, OverlayRule::Union)
}

fn overlay(subject: &[Polygon], clip: &[Polygon], rule: OverlayRule) -> Vec<PolygonSet> {
    let subject: Vec<Vec<[f64; 2]>> = subject.iter().map(to_path).collect();
    let clip: Vec<Vec<[f64; 2]>> = clip.iter().map(to_path).collect();
    if subject.is_empty() && clip.is_empty() {
        return Vec::new();
    }

    let shapes = subject.overlay(&clip, rule, FillRule::EvenOdd);
    shapes.into_iter().filter_map(shape_to_set).collect()
}

fn to_path(polygon: &Polygon) -> Vec<[f64; 2]> {
    polygon.points().iter().map(|p| [p.x, p.y]).collect()
}

fn from_path(path: Vec<[f64; 2]>) -> Option<Polygon> {
    Polygon::new(path.into_iter().map(|[x, y]| Vec2::new(x, y)).collect()).ok()
}

/// First contour is the outer boundary, the rest are holes.
fn shape_to_set(shape: Vec<Vec<[f64; 2]>>) -> Option<PolygonSet> {
    let mut contours = shape.into_iter();
    let outer = from_path(contours.next()?)?;
    let holes = contours.filter_map(from_path).collect();
    Some(PolygonSet::new(outer, holes))
}
