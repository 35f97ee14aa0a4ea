//! Deterministic visual attributes for plot points.
//!
//! - [`color`] - The hue ramp that spreads series (or points) across the color wheel
//! - [`shape`] - The four highlight glyphs available to tagged points

pub mod color;
pub mod shape;
