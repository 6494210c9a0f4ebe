//! Flattened curves with arc-length sampling.

use crate::error::{GeometryError, Result, ensure_positive};
use crate::geom::{Point, Size};

/// Fraction of the path trailing behind a sample, used to derive the tangent.
const TRAIL: f64 = 0.01;

/// Flattening resolution for cubic segments.
const CURVE_STEPS: usize = 32;

/// A point on a path together with the direction of travel at that point,
/// as an angle in radians. Derived fresh per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Point,
    pub tangent_angle: f64,
}

/// A cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezier {
    /// Evaluate the curve at parameter `t` in `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b0 * self.from.x + b1 * self.ctrl1.x + b2 * self.ctrl2.x + b3 * self.to.x,
            b0 * self.from.y + b1 * self.ctrl1.y + b2 * self.ctrl2.y + b3 * self.to.y,
        )
    }
}

/// A polyline approximation of a curve, with a cumulative arc-length table
/// so positions can be looked up by fractional arc position.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Point>,
    /// Cumulative length up to each point; same length as `points`.
    arc_lengths: Vec<f64>,
    closed: bool,
}

impl Path {
    /// Build a path from a point sequence. Closed paths get the first point
    /// appended when the caller has not already closed the loop.
    pub fn from_points(mut points: Vec<Point>, closed: bool) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidParameter {
                name: "points",
                value: points.len() as f64,
            });
        }
        if closed && points.first() != points.last() {
            points.push(points[0]);
        }

        let mut arc_lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        arc_lengths.push(0.0);
        for pair in points.windows(2) {
            total += pair[0].distance(pair[1]);
            arc_lengths.push(total);
        }

        Ok(Self {
            points,
            arc_lengths,
            closed,
        })
    }

    /// Build a path by flattening a chain of cubic segments. Segment
    /// endpoints are assumed to chain head to tail.
    pub fn from_cubics(curves: &[CubicBezier], closed: bool) -> Result<Self> {
        let mut points = Vec::with_capacity(curves.len() * CURVE_STEPS + 1);
        for (idx, curve) in curves.iter().enumerate() {
            let start = if idx == 0 { 0 } else { 1 };
            for step in start..=CURVE_STEPS {
                points.push(curve.eval(step as f64 / CURVE_STEPS as f64));
            }
        }
        Self::from_points(points, closed)
    }

    /// Whether the path loops back on itself.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total arc length.
    pub fn total_length(&self) -> f64 {
        *self.arc_lengths.last().unwrap_or(&0.0)
    }

    /// The flattened point sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Position at fractional arc position `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let target = t.clamp(0.0, 1.0) * self.total_length();
        // first index whose cumulative length reaches the target
        let idx = self.arc_lengths.partition_point(|&len| len < target);
        if idx == 0 {
            return self.points[0];
        }
        let span = self.arc_lengths[idx] - self.arc_lengths[idx - 1];
        let frac = if span > 0.0 {
            (target - self.arc_lengths[idx - 1]) / span
        } else {
            0.0
        };
        let a = self.points[idx - 1];
        let b = self.points[idx];
        Point::new(a.x + (b.x - a.x) * frac, a.y + (b.y - a.y) * frac)
    }

    /// Sample the position and direction of travel at fractional arc
    /// position `t`. Out-of-range positions wrap: above 1 to the start,
    /// below 0 to the end.
    ///
    /// The tangent comes from the vector between the sample and a trailing
    /// point 1% of the path behind it, converted with a four-quadrant
    /// `atan2` so the angle stays continuous through vertical tangents. An
    /// open path has nothing behind its start, so samples there look ahead
    /// by the same fraction instead.
    pub fn sample(&self, t: f64) -> PathSample {
        let t = wrap_unit(t);
        let position = self.point_at(t);

        let tangent_angle = if self.closed {
            // wrap additively so the trailing point never collapses onto the
            // sample at t = 0
            let trailing = self.point_at((t - TRAIL).rem_euclid(1.0));
            (position.y - trailing.y).atan2(position.x - trailing.x)
        } else if t >= TRAIL {
            let trailing = self.point_at(t - TRAIL);
            (position.y - trailing.y).atan2(position.x - trailing.x)
        } else {
            let ahead = self.point_at(t + TRAIL);
            (ahead.y - position.y).atan2(ahead.x - position.x)
        };

        PathSample {
            position,
            tangent_angle,
        }
    }
}

/// Wrap a fractional position into `[0, 1]`: above 1 restarts at 0, below 0
/// lands at the end.
fn wrap_unit(t: f64) -> f64 {
    if t > 1.0 {
        0.0
    } else if t < 0.0 {
        1.0
    } else {
        t
    }
}

/// The lemniscate ("infinity") curve used by the follow-path demo: four
/// cubic arcs spanning the quarters of the rect, chained into a closed loop.
pub fn infinity_path(size: Size) -> Result<Path> {
    ensure_positive("width", size.width)?;
    ensure_positive("height", size.height)?;

    let wf = size.width / 4.0;
    let hf = size.height / 4.0;
    // the right lobe's control points overshoot the rect edge slightly,
    // matching the curve's original proportions
    let overshoot = wf * 4.0 + 5.0;

    let curves = [
        CubicBezier {
            from: Point::new(wf, hf * 3.0),
            ctrl1: Point::new(0.0, hf * 3.0),
            ctrl2: Point::new(0.0, hf),
            to: Point::new(wf, hf),
        },
        CubicBezier {
            from: Point::new(wf, hf),
            ctrl1: Point::new(wf * 2.0, hf),
            ctrl2: Point::new(wf * 2.0, hf * 3.0),
            to: Point::new(wf * 3.0, hf * 3.0),
        },
        CubicBezier {
            from: Point::new(wf * 3.0, hf * 3.0),
            ctrl1: Point::new(overshoot, hf * 3.0),
            ctrl2: Point::new(overshoot, hf),
            to: Point::new(wf * 3.0, hf),
        },
        CubicBezier {
            from: Point::new(wf * 3.0, hf),
            ctrl1: Point::new(wf * 2.0, hf),
            ctrl2: Point::new(wf * 2.0, hf * 3.0),
            to: Point::new(wf, hf * 3.0),
        },
    ];

    Path::from_cubics(&curves, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn unit_square() -> Path {
        Path::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn closed_paths_append_the_first_point() {
        let path = unit_square();
        assert_eq!(path.points().len(), 5);
        assert_eq!(path.total_length(), 4.0);
    }

    #[test]
    fn point_at_walks_the_perimeter() {
        let path = unit_square();
        assert_eq!(path.point_at(0.0), Point::new(0.0, 0.0));
        assert_eq!(path.point_at(0.125), Point::new(0.5, 0.0));
        assert_eq!(path.point_at(0.25), Point::new(1.0, 0.0));
        assert_eq!(path.point_at(0.5), Point::new(1.0, 1.0));
        assert_eq!(path.point_at(1.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn sample_wraps_at_the_ends() {
        let path = unit_square();
        assert_eq!(path.sample(0.0).position, path.sample(1.0).position);
        assert_eq!(path.sample(1.5).position, path.point_at(0.0));
        assert_eq!(path.sample(-0.25).position, path.point_at(1.0));
    }

    #[test]
    fn tangent_follows_the_direction_of_travel() {
        let path = unit_square();
        // middle of the bottom edge, travelling +x
        let bottom = path.sample(0.125);
        assert!(bottom.tangent_angle.abs() < 1e-9);
        // middle of the top edge, travelling -x
        let top = path.sample(0.625);
        assert!((top.tangent_angle.abs() - PI).abs() < 1e-9);
    }

    #[test]
    fn tangent_is_continuous_through_vertical_segments() {
        let path = unit_square();
        // the right edge runs straight down the +y direction; samples along
        // it must agree instead of jumping by pi at the vertical
        let a = path.sample(0.3).tangent_angle;
        let b = path.sample(0.4).tangent_angle;
        assert!((a - FRAC_PI_2).abs() < 1e-9);
        assert!((b - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn tangent_at_zero_uses_the_wrapped_trailing_point() {
        let path = unit_square();
        // trailing point wraps onto the left edge, so travel is +x-ish, not
        // the degenerate zero vector
        let start = path.sample(0.0);
        assert!(start.tangent_angle.to_degrees().abs() < 91.0);
        assert!(start.position.distance(Point::ZERO) < 1e-9);
    }

    #[test]
    fn open_paths_look_ahead_at_the_start() {
        let path = Path::from_points(vec![Point::ZERO, Point::new(1.0, 1.0)], false).unwrap();
        // at t = 0 the trailing point would sit on the sample itself; the
        // tangent must still point along the line, not default to zero
        let start = path.sample(0.0);
        assert!((start.tangent_angle - FRAC_PI_4).abs() < 1e-9);
        let end = path.sample(1.0);
        assert!((end.tangent_angle - FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn too_few_points_are_rejected() {
        assert!(Path::from_points(vec![Point::ZERO], true).is_err());
        assert!(Path::from_points(Vec::new(), false).is_err());
    }

    #[test]
    fn cubic_eval_hits_the_endpoints() {
        let curve = CubicBezier {
            from: Point::new(0.0, 0.0),
            ctrl1: Point::new(1.0, 0.0),
            ctrl2: Point::new(2.0, 3.0),
            to: Point::new(3.0, 3.0),
        };
        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
    }

    #[test]
    fn infinity_path_closes_and_spans_the_rect() {
        let size = Size::new(400.0, 300.0);
        let path = infinity_path(size).unwrap();
        assert!(path.is_closed());
        assert_eq!(path.sample(0.0).position, path.sample(1.0).position);
        // crossing point of the figure eight sits near the rect center
        let xs: Vec<f64> = path.points().iter().map(|p| p.x).collect();
        let min_x = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(min_x >= 0.0);
        assert!(max_x > size.width * 0.7);
    }
}
