use crate::polygon::{Polygon, PolygonSet};
use crate::section::CrossSection;
use std::fmt::Write as _;

/// SVG path data, one `M … Z` subpath per contour, in section coordinates.
pub fn path_data(shapes: &[PolygonSet]) -> String {
    let mut out = String::new();
    for contour in shapes.iter().flat_map(PolygonSet::contours) {
        push_contour(&mut out, contour);
    }
    out
}

fn push_contour(out: &mut String, contour: &Polygon) {
    for (i, p) in contour.points().iter().enumerate() {
        if !out.is_empty() {
            out.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{cmd}{} {}", fmt_num(p.x), fmt_num(p.y));
    }
    out.push_str(" Z");
}

/// Standalone preview document. The y axis is flipped so the roof points up.
pub fn document(section: &CrossSection) -> String {
    let bbox = section.bbox();
    let margin = bbox.width().max(bbox.height()) * 0.02;
    let stroke = bbox.width().max(bbox.height()) * 0.002;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt_num(bbox.min.x - margin),
        fmt_num(-bbox.max.y - margin),
        fmt_num(bbox.width() + 2.0 * margin),
        fmt_num(bbox.height() + 2.0 * margin),
    );
    let _ = writeln!(out, "  <title>{}</title>", section.key);
    let _ = writeln!(
        out,
        r##"  <path transform="scale(1,-1)" fill="#d9d4c7" fill-rule="evenodd" stroke="#333333" stroke-width="{}" d="{}"/>"##,
        fmt_num(stroke),
        section.path
    );
    out.push_str("</svg>\n");
    out
}

/// Up to three decimals, trailing zeros dropped.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}
