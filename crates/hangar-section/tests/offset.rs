use approx::assert_relative_eq;
use hangar_core::geom::Vec2;
use hangar_section::offset::offset;
use hangar_section::profile::{RoofProfile, SectionConstants};
use hangar_section::{Polygon, SectionError};

fn pts(coords: &[(f64, f64)]) -> Vec<Vec2> {
    coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

#[test]
fn rejects_polygons_with_fewer_than_three_points() {
    let err = Polygon::new(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])).unwrap_err();
    assert!(matches!(err, SectionError::MalformedPolygon(_)));
    assert!(Polygon::new(pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)])).is_err());
}

#[test]
fn inset_of_roof_profile_keeps_five_corners() {
    let constants = SectionConstants::default();
    let outline = RoofProfile::new("A", Vec2::new(2850.0, 8850.0))
        .outline(&constants)
        .unwrap();

    let insets = offset(&outline, -500.0);
    assert_eq!(1, insets.len());
    let inset = &insets[0];
    assert_eq!(5, inset.len());
    assert!(inset.is_ccw());

    let bbox = inset.bbox();
    assert!(bbox.width() < 5700.0);
    assert!(bbox.width() >= 4700.0 - 1e-6);
    assert_relative_eq!(500.0, bbox.min.y, epsilon = 1e-4);
    // 45 degree roof: the apex drops by delta * sqrt(2).
    assert_relative_eq!(8850.0 - 500.0 * 2f64.sqrt(), bbox.max.y, epsilon = 1e-4);
}

#[test]
fn outward_offset_grows_square_with_round_corners() {
    let square = Polygon::rect(Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1000.0)).unwrap();
    let grown = offset(&square, 100.0);
    assert_eq!(1, grown.len());
    assert!(grown[0].is_ccw());
    assert!(grown[0].len() > 8);
    assert_relative_eq!(1200.0, grown[0].bbox().width(), epsilon = 1e-4);
    assert_relative_eq!(1200.0, grown[0].bbox().height(), epsilon = 1e-4);

    // Four quarter circles of radius 100 replace the square corners.
    let rounded = 1_440_000.0 - (4.0 - std::f64::consts::PI) * 100.0 * 100.0;
    assert!(grown[0].area() <= rounded + 1e-3);
    assert_relative_eq!(rounded, grown[0].area(), max_relative = 1e-3);
}

#[test]
fn clockwise_input_is_offset_inward_too() {
    let square = Polygon::rect(Vec2::new(0.0, 0.0), Vec2::new(1000.0, 1000.0))
        .unwrap()
        .reversed();
    let inset = offset(&square, -100.0);
    assert_eq!(1, inset.len());
    assert_relative_eq!(640_000.0, inset[0].area(), epsilon = 1e-3);
}

#[test]
fn zero_delta_returns_the_input() {
    let square = Polygon::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).unwrap();
    assert_eq!(vec![square.clone()], offset(&square, 0.0));
}

#[test]
fn collapsing_inset_yields_nothing() {
    let narrow = Polygon::rect(Vec2::new(0.0, 0.0), Vec2::new(800.0, 3000.0)).unwrap();
    assert!(offset(&narrow, -500.0).is_empty());

    let triangle = Polygon::new(pts(&[(0.0, 0.0), (1000.0, 0.0), (0.0, 1000.0)])).unwrap();
    assert!(offset(&triangle, -400.0).is_empty());

    let constants = SectionConstants::default();
    let outline = RoofProfile::new("A", Vec2::new(2850.0, 8850.0))
        .outline(&constants)
        .unwrap();
    assert!(offset(&outline, -3000.0).is_empty());
}

#[test]
fn short_edge_collapse_is_pruned() {
    // Chamfered square: the 100 mm chamfer edge disappears under a 300 mm inset.
    let chamfered = Polygon::new(pts(&[
        (0.0, 0.0),
        (2000.0, 0.0),
        (2000.0, 1900.0),
        (1900.0, 2000.0),
        (0.0, 2000.0),
    ]))
    .unwrap();
    let inset = offset(&chamfered, -300.0);
    assert_eq!(1, inset.len());
    assert_eq!(4, inset[0].len());
    assert_relative_eq!(1400.0, inset[0].bbox().width(), epsilon = 1e-4);
}

#[test]
fn pinched_neck_splits_into_separate_insets() {
    // Two 2 m squares joined by a 400 mm corridor, which closes under a 500 mm inset.
    let dumbbell = Polygon::new(pts(&[
        (0.0, 0.0),
        (2000.0, 0.0),
        (2000.0, 800.0),
        (4000.0, 800.0),
        (4000.0, 0.0),
        (6000.0, 0.0),
        (6000.0, 2000.0),
        (4000.0, 2000.0),
        (4000.0, 1200.0),
        (2000.0, 1200.0),
        (2000.0, 2000.0),
        (0.0, 2000.0),
    ]))
    .unwrap();

    let mut insets = offset(&dumbbell, -500.0);
    assert_eq!(2, insets.len());
    insets.sort_by(|a, b| a.bbox().min.x.total_cmp(&b.bbox().min.x));
    // Each square keeps its 1000 mm core plus a sliver bulging into the
    // corridor mouth, bounded by arcs around the reflex corners.
    let bulge = 2000.0 - (500.0f64 * 500.0 - 200.0 * 200.0).sqrt();
    for inset in &insets {
        assert!(inset.is_ccw());
        assert!(inset.area() > 1_000_000.0);
        assert!(inset.area() < 1_000_000.0 + 400.0 * (bulge - 1500.0));
    }
    assert_relative_eq!(500.0, insets[0].bbox().min.x, epsilon = 1e-4);
    assert_relative_eq!(bulge, insets[0].bbox().max.x, epsilon = 1e-3);
    assert_relative_eq!(5500.0, insets[1].bbox().max.x, epsilon = 1e-4);
    assert_relative_eq!(6000.0 - bulge, insets[1].bbox().min.x, epsilon = 1e-3);
}

#[test]
fn collapsing_tab_leaves_the_body_inset() {
    // A 400 mm wide tab on top of a 4 m square vanishes under a 500 mm inset.
    let tabbed = Polygon::new(pts(&[
        (0.0, 0.0),
        (4000.0, 0.0),
        (4000.0, 4000.0),
        (2200.0, 4000.0),
        (2200.0, 5000.0),
        (1800.0, 5000.0),
        (1800.0, 4000.0),
        (0.0, 4000.0),
    ]))
    .unwrap();

    let insets = offset(&tabbed, -500.0);
    assert_eq!(1, insets.len());
    let inset = &insets[0];
    assert!(inset.is_ccw());

    let bbox = inset.bbox();
    assert_relative_eq!(500.0, bbox.min.x, epsilon = 1e-4);
    assert_relative_eq!(3500.0, bbox.max.x, epsilon = 1e-4);
    assert_relative_eq!(500.0, bbox.min.y, epsilon = 1e-4);
    // The tab mouth lets the inset rise to where the arcs around its two
    // reflex corners meet.
    let peak = 4000.0 - (500.0f64 * 500.0 - 200.0 * 200.0).sqrt();
    assert_relative_eq!(peak, bbox.max.y, epsilon = 1e-3);
    assert!(inset.area() > 3000.0 * 3000.0);
    assert!(inset.area() < 3000.0 * 3000.0 + 400.0 * (peak - 3500.0));
}
