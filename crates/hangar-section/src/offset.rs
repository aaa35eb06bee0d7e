//! Polygon offsetting on top of `cavalier_contours`.
//!
//! The input is turned into a closed counter-clockwise polyline and handed to
//! `parallel_offset`, which trims collapsed edges, splits pinched necks into
//! separate loops and joins outward corners with arcs. Arcs in the result are
//! flattened back into straight segments.

use crate::polygon::{signed_area, Polygon};
use cavalier_contours::polyline::{PlineSource, PlineSourceMut, PlineVertex, Polyline};
use hangar_core::geom::Vec2;
use nalgebra::{Point2, Rotation2, Vector2};

const EPSILON: f64 = 1e-9;

/// Loops smaller than this (mm²) are numerical debris.
const MIN_LOOP_AREA: f64 = 1e-6;

/// Largest distance (mm) between a flattened arc and its chords.
const ARC_TOLERANCE: f64 = 0.1;

/// Offsets `polygon` by `delta`: positive grows the shape, negative shrinks it.
///
/// The result holds zero or more counter-clockwise polygons. Shrinking past
/// the point where the shape vanishes yields an empty list.
pub fn offset(polygon: &Polygon, delta: f64) -> Vec<Polygon> {
    let ccw = polygon.to_ccw();
    if delta.abs() < EPSILON {
        return vec![ccw];
    }

    let pline = to_pline(&ccw);
    // A positive distance moves a counter-clockwise loop inward.
    let results = pline.parallel_offset(-delta);

    let insets: Vec<Polygon> = results
        .iter()
        .filter_map(|result| {
            let pts = flatten(result);
            if signed_area(&pts) <= MIN_LOOP_AREA {
                return None;
            }
            Polygon::new(pts).ok()
        })
        .collect();

    if insets.is_empty() {
        tracing::debug!(delta, "offset collapsed");
    }
    insets
}

fn to_pline(polygon: &Polygon) -> Polyline<f64> {
    let mut pline = Polyline::new();
    for p in polygon.points() {
        pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
    }
    pline.set_is_closed(true);
    pline
}

/// Replaces every bulged segment with chords no further than `ARC_TOLERANCE` from the arc.
fn flatten(pline: &Polyline<f64>) -> Vec<Vec2> {
    let n = pline.vertex_count();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let v1 = pline.at(i);
        let v2 = pline.at((i + 1) % n);
        let start = Point2::new(v1.x, v1.y);
        points.push(Vec2::new(start.x, start.y));
        if v1.bulge.abs() < EPSILON {
            continue;
        }

        let end = Point2::new(v2.x, v2.y);
        let chord = end - start;
        let len = chord.norm();
        if len < EPSILON {
            continue;
        }
        let sweep = 4.0 * v1.bulge.atan();
        let left = Vector2::new(-chord.y, chord.x) / len;
        let center = nalgebra::center(&start, &end) + left * (len / 2.0 / (sweep / 2.0).tan());
        let radius = (start - center).norm();

        let max_step = 2.0 * (1.0 - (ARC_TOLERANCE / radius).min(1.0)).acos();
        let steps = (sweep.abs() / max_step.max(EPSILON)).ceil().max(1.0) as usize;
        let arm = start - center;
        for k in 1..steps {
            let p = center + Rotation2::new(sweep * k as f64 / steps as f64) * arm;
            points.push(Vec2::new(p.x, p.y));
        }
    }
    points
}
