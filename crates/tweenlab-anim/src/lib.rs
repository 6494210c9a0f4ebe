//! Animation driving for the tweenlab demos.
//!
//! The pure geometry lives in `tweenlab-core`; this crate supplies the
//! moving parts around it: easing curves, retargetable tweens evaluated from
//! elapsed milliseconds, a composable transform chain with a perspective
//! flip projection, and a command queue for state changes that must wait
//! until the frame has finished rendering.

mod commands;
mod easing;
mod transform;
mod tween;

pub use commands::CommandQueue;
pub use easing::Easing;
pub use transform::{FlipTransform, Transform, TransformOp, compose, flip_transform};
pub use tween::{Animatable, Tween};
