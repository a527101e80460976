use std::fmt::Write as _;

use kurbo::{BezPath, PathEl, Point};

/// Serialize a path as compact SVG path data (`M0,0L48,10.88C...Z`).
///
/// Coordinates are rounded to three decimals with trailing zeros dropped, so the
/// output is stable across platforms and free of float noise like `10.880000000000001`.
pub fn to_path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => push_cmd(&mut out, 'M', &[p]),
            PathEl::LineTo(p) => push_cmd(&mut out, 'L', &[p]),
            PathEl::QuadTo(a, b) => push_cmd(&mut out, 'Q', &[a, b]),
            PathEl::CurveTo(a, b, c) => push_cmd(&mut out, 'C', &[a, b, c]),
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

fn push_cmd(out: &mut String, cmd: char, points: &[Point]) {
    out.push(cmd);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y));
    }
}

pub(crate) fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoid "-0".
    let r = if r == 0.0 { 0.0 } else { r };
    let s = format!("{r:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}

/// Count of move-to and line-to vertices in a path.
pub fn vertex_count(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_) | PathEl::LineTo(_)))
        .count()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path_data.rs"]
mod tests;
