//! Pure geometry for the tweenlab demo gallery.
//!
//! Everything in this crate is a stateless function of its inputs: polygon
//! outlines with a fractional side count, vertex-to-vertex diagonals, clock
//! hand geometry, and arc-length sampling along flattened curves. The
//! rendering layer re-evaluates these every frame, so nothing here caches,
//! blocks, or holds hidden state.

mod clock;
mod error;
mod geom;
mod path;
mod polygon;

pub use clock::{ClockFace, ClockTime, clock_face, clock_face_smooth};
pub use error::{GeometryError, Result};
pub use geom::{Circle, Point, Segment, Size};
pub use path::{CubicBezier, Path, PathSample, infinity_path};
pub use polygon::{polygon_path, vertex_diagonals};
