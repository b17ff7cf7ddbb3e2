//! Placement math for the pointer-tracked glow disc.

#[cfg(test)]
#[path = "glow_test.rs"]
mod glow_test;

use crate::state::view::PointerPosition;

/// Diameter of the glow disc in CSS pixels.
pub const GLOW_DIAMETER_PX: f64 = 384.0;

/// Top-left offset placing the disc's center on the pointer.
pub fn glow_offset(pointer: PointerPosition) -> (f64, f64) {
    let half = GLOW_DIAMETER_PX / 2.0;
    (pointer.x - half, pointer.y - half)
}

/// Inline style declaration positioning the glow element.
pub fn glow_style(pointer: PointerPosition) -> String {
    let (left, top) = glow_offset(pointer);
    format!("left: {left}px; top: {top}px;")
}
