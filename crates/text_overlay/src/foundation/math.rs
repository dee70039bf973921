//! Math utilities and types
//!
//! Screen-space positions are kept in double precision, matching the
//! scripting API; they are narrowed to `f32` only when handed to a backend.

pub use nalgebra::Vector2;

/// Screen position in script units
pub type ScreenPos = Vector2<f64>;

/// Divide a coordinate by a scale factor the way the host transform expects
///
/// The backend multiplies everything by the active scale, so positions are
/// pre-divided to land where the caller asked.
#[inline]
pub fn unscale(value: f64, scale: f64) -> f64 {
    value / scale
}
