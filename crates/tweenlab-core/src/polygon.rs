//! Parametric polygon outlines with a fractional side count.

use std::f64::consts::TAU;

use crate::error::{Result, ensure_positive};
use crate::geom::{Point, Segment, Size};

/// Generate the vertices of a regular polygon inscribed in `size`.
///
/// `sides` may be fractional: the vertex count is `ceil(sides)`, while the
/// angular step divides the full turn by the fractional value itself. The
/// extra vertex therefore sits short of a full step, producing the
/// foreshortened partial edge that makes the side count animate smoothly
/// between integers.
///
/// The returned sequence is closed implicitly (last vertex connects back to
/// the first). A `sides` value below 1 degenerates to a single point, which
/// is allowed; zero or negative values are rejected because the angular step
/// would divide by zero.
pub fn polygon_path(sides: f64, scale: f64, size: Size) -> Result<Vec<Point>> {
    ensure_positive("sides", sides)?;
    ensure_positive("scale", scale)?;
    ensure_positive("width", size.width)?;
    ensure_positive("height", size.height)?;

    let radius = size.min_side() / 2.0 * scale;
    let center = size.center();

    let extra = if sides.fract() != 0.0 { 1 } else { 0 };
    let count = sides as usize + extra;
    let step = TAU / sides;

    Ok((0..count)
        .map(|i| {
            let angle = i as f64 * step;
            Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            )
        })
        .collect())
}

/// All vertex-to-vertex lines that skip at least one vertex, without
/// duplicating the polygon's own edges.
///
/// Each start index connects to every vertex at least two steps ahead,
/// stopping one short of wrapping back onto an adjacent edge; the start
/// window shrinks by one per pass and ends once fewer than three vertices
/// remain. A polygon of `n >= 4` vertices yields `n * (n - 3) / 2` segments,
/// smaller polygons yield none.
pub fn vertex_diagonals(vertices: &[Point]) -> Vec<Segment> {
    let count = vertices.len();
    let mut segments = Vec::new();

    for n in 0..count {
        if count - n < 3 {
            break;
        }
        for i in (n + 2)..(n + count - 1).min(count) {
            segments.push(Segment {
                from: vertices[n],
                to: vertices[i],
            });
        }
    }

    segments
}
