//! Geometric transforms: quarter-turn rotations and mirror flips.
//!
//! Unlike the per-pixel operations in [`crate::engine`], these move pixels to
//! new positions. Flips work in place on any stride; rotations swap width
//! and height and therefore return a new tightly packed buffer.
//!
//! # Coordinate System
//!
//! - Origin is the top-left pixel
//! - "Clockwise" is as seen on screen

mod flip;
mod rotate;

pub use flip::{flip_horizontal, flip_vertical, rotate_half_turn};
pub use rotate::{rotate_clockwise, rotate_counter_clockwise};
