//! Composable 2D transforms and the perspective flip projection.

use tweenlab_core::{Point, Size};

/// A 2D affine transform. Applying it maps
/// `(x, y)` to `(a*x + b*y + tx, c*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    /// The do-nothing transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Pure translation.
    pub const fn translation(x: f64, y: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: x,
            ty: y,
        }
    }

    /// Rotation about the origin by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Axis-aligned scaling about the origin.
    pub const fn scaling(x: f64, y: f64) -> Self {
        Self {
            a: x,
            b: 0.0,
            c: 0.0,
            d: y,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Shear each axis by the other.
    pub const fn skew(x: f64, y: f64) -> Self {
        Self {
            a: 1.0,
            b: x,
            c: y,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// The transform that applies `self` first, then `other`.
    pub fn then(self, other: Self) -> Self {
        Self {
            a: other.a * self.a + other.b * self.c,
            b: other.a * self.b + other.b * self.d,
            c: other.c * self.a + other.d * self.c,
            d: other.c * self.b + other.d * self.d,
            tx: other.a * self.tx + other.b * self.ty + other.tx,
            ty: other.c * self.tx + other.d * self.ty + other.ty,
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }
}

/// One step of a declarative transform chain.
///
/// A chain of these is the uniform stand-in for stacking heterogeneous
/// modifiers on a view: each step is a plain variant, and [`compose`] folds
/// the list into a single matrix applied in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
    Scale { x: f64, y: f64 },
    Skew { x: f64, y: f64 },
}

impl TransformOp {
    fn to_transform(self) -> Transform {
        match self {
            Self::Translate { x, y } => Transform::translation(x, y),
            Self::Rotate { angle } => Transform::rotation(angle),
            Self::Scale { x, y } => Transform::scaling(x, y),
            Self::Skew { x, y } => Transform::skew(x, y),
        }
    }
}

/// Fold a chain of ops into one transform; the first op applies first.
pub fn compose(ops: &[TransformOp]) -> Transform {
    ops.iter()
        .fold(Transform::IDENTITY, |acc, op| acc.then(op.to_transform()))
}

/// A 3D rotation about an arbitrary axis, projected back onto the plane
/// with a perspective term and pivoted on the center of the rect.
///
/// This is the classic layer-transform recipe: perspective
/// `m34 = -1 / max(w, h)`, rotate, recenter. Points further from the viewer
/// shrink toward the center, which is what sells the card flip.
#[derive(Debug, Clone, Copy)]
pub struct FlipTransform {
    rotation: [[f64; 3]; 3],
    center: Point,
    m34: f64,
}

/// Build the flip projection for a rotation of `angle` radians about `axis`
/// within a rect of `size`. A zero-length axis leaves points untouched.
pub fn flip_transform(angle: f64, axis: (f64, f64, f64), size: Size) -> FlipTransform {
    let center = size.center();
    let m34 = -1.0 / size.width.max(size.height);

    let len = (axis.0 * axis.0 + axis.1 * axis.1 + axis.2 * axis.2).sqrt();
    if len == 0.0 {
        return FlipTransform {
            rotation: IDENTITY_3X3,
            center,
            m34,
        };
    }
    let (ux, uy, uz) = (axis.0 / len, axis.1 / len, axis.2 / len);

    // Rodrigues rotation matrix for the normalized axis
    let (sin, cos) = angle.sin_cos();
    let k = 1.0 - cos;
    let rotation = [
        [
            cos + ux * ux * k,
            ux * uy * k - uz * sin,
            ux * uz * k + uy * sin,
        ],
        [
            uy * ux * k + uz * sin,
            cos + uy * uy * k,
            uy * uz * k - ux * sin,
        ],
        [
            uz * ux * k - uy * sin,
            uz * uy * k + ux * sin,
            cos + uz * uz * k,
        ],
    ];

    FlipTransform {
        rotation,
        center,
        m34,
    }
}

const IDENTITY_3X3: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

impl FlipTransform {
    /// Project a point of the rect onto the screen plane.
    pub fn project(&self, p: Point) -> Point {
        let x = p.x - self.center.x;
        let y = p.y - self.center.y;

        let rx = self.rotation[0][0] * x + self.rotation[0][1] * y;
        let ry = self.rotation[1][0] * x + self.rotation[1][1] * y;
        let rz = self.rotation[2][0] * x + self.rotation[2][1] * y;

        let w = 1.0 + rz * self.m34;
        // points at the eye plane would divide by zero; the rects involved
        // are always far smaller than the perspective distance
        let w = if w.abs() < 1e-9 { 1e-9 } else { w };

        Point::new(rx / w + self.center.x, ry / w + self.center.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: Point, b: Point) {
        assert!(a.distance(b) < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn ops_compose_in_order() {
        // translate then rotate is not rotate then translate
        let translate_first = compose(&[
            TransformOp::Translate { x: 1.0, y: 0.0 },
            TransformOp::Rotate { angle: FRAC_PI_2 },
        ]);
        let rotate_first = compose(&[
            TransformOp::Rotate { angle: FRAC_PI_2 },
            TransformOp::Translate { x: 1.0, y: 0.0 },
        ]);

        // rotation sends +x to -y here (y grows downward on screen)
        assert_close(translate_first.apply(Point::ZERO), Point::new(0.0, 1.0));
        assert_close(rotate_first.apply(Point::ZERO), Point::new(1.0, 0.0));
    }

    #[test]
    fn empty_chain_is_identity() {
        assert_eq!(compose(&[]), Transform::IDENTITY);
        assert_eq!(Transform::IDENTITY.apply(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn skew_shears_one_axis_by_the_other() {
        let t = compose(&[TransformOp::Skew { x: 0.5, y: 0.0 }]);
        assert_close(t.apply(Point::new(0.0, 2.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn scale_and_translate_stack() {
        let t = compose(&[
            TransformOp::Scale { x: 2.0, y: 3.0 },
            TransformOp::Translate { x: -1.0, y: 1.0 },
        ]);
        assert_close(t.apply(Point::new(1.0, 1.0)), Point::new(1.0, 4.0));
    }

    #[test]
    fn zero_angle_flip_is_the_identity_on_the_plane() {
        let size = Size::new(212.0, 320.0);
        let flip = flip_transform(0.0, (1.0, 1.0, 0.0), size);
        let p = Point::new(10.0, 250.0);
        assert_close(flip.project(p), p);
    }

    #[test]
    fn half_turn_about_y_mirrors_x_across_the_center() {
        let size = Size::new(200.0, 200.0);
        let flip = flip_transform(PI, (0.0, 1.0, 0.0), size);
        let projected = flip.project(Point::new(150.0, 120.0));
        // x reflects about the center; y stays (z is back on the plane)
        assert_close(projected, Point::new(50.0, 120.0));
    }

    #[test]
    fn quarter_turn_foreshortens_toward_the_center() {
        let size = Size::new(200.0, 200.0);
        let flip = flip_transform(FRAC_PI_2, (0.0, 1.0, 0.0), size);
        let projected = flip.project(Point::new(150.0, 100.0));
        // the edge swings into depth: x collapses to the center line
        assert!((projected.x - 100.0).abs() < 1e-9);
        assert_eq!(projected.y, 100.0);
    }

    #[test]
    fn zero_axis_projects_points_unchanged() {
        let flip = flip_transform(1.0, (0.0, 0.0, 0.0), Size::new(100.0, 100.0));
        let p = Point::new(12.0, 34.0);
        assert_close(flip.project(p), p);
    }
}
