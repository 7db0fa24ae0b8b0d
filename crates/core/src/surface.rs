//! Card surface and the pixel <-> percentage coordinate converter.
//!
//! Percentages are the canonical representation of every position on the
//! card, so layouts survive a change of rendered size. Pixel space is only
//! used while translating pointer input.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Upper bound of the normalized coordinate space on each axis.
pub const PERCENT_MAX: f32 = 100.0;

/// Rendered pixel dimensions of the card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl SurfaceSize {
    /// Create a surface of the given pixel dimensions.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has been laid out with a usable size.
    ///
    /// A zero, negative or non-finite dimension means the renderer has not
    /// measured the card yet; coordinate math must be skipped until it has.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Dimensions as a vector.
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Geometric center in pixels.
    pub fn center(&self) -> Vec2 {
        self.as_vec2() * 0.5
    }
}

/// A position in normalized card space, 0-100 on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Percent {
    /// Horizontal percentage of the surface width.
    pub x: f32,
    /// Vertical percentage of the surface height.
    pub y: f32,
}

impl Percent {
    /// Create a percentage position without clamping.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis independently to `[0, 100]`.
    ///
    /// NaN collapses to 0 so a bad input can never escape the valid range.
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_axis(self.x),
            y: clamp_axis(self.y),
        }
    }

    /// Whether both axes lie within `[0, 100]`.
    pub fn in_bounds(&self) -> bool {
        (0.0..=PERCENT_MAX).contains(&self.x) && (0.0..=PERCENT_MAX).contains(&self.y)
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, PERCENT_MAX)
    }
}

impl From<Percent> for Vec2 {
    fn from(p: Percent) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Percent {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Convert a pixel position to percentages of `surface`.
///
/// No clamping is performed. Returns `None` while the surface is unmeasured.
pub fn to_percent(pixel: Vec2, surface: SurfaceSize) -> Option<Percent> {
    if !surface.is_measured() {
        return None;
    }
    Some(Percent::from(pixel / surface.as_vec2() * PERCENT_MAX))
}

/// Convert a percentage position to pixels on `surface`.
pub fn to_pixel(percent: Percent, surface: SurfaceSize) -> Vec2 {
    Vec2::from(percent) / PERCENT_MAX * surface.as_vec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-3
    }

    #[test]
    fn percent_of_card_example() {
        let surface = SurfaceSize::new(360.0, 200.0);
        let pixel = to_pixel(Percent::new(65.5556, 22.0), surface);
        assert!(approx(pixel, Vec2::new(236.0, 44.0)), "got {pixel:?}");

        let back = to_percent(Vec2::new(296.0, 74.0), surface).expect("measured");
        assert!((back.x - 82.2222).abs() < 1e-3);
        assert!((back.y - 37.0).abs() < 1e-3);
    }

    #[test]
    fn unmeasured_surface_yields_none() {
        assert!(to_percent(Vec2::new(10.0, 10.0), SurfaceSize::new(0.0, 200.0)).is_none());
        assert!(to_percent(Vec2::new(10.0, 10.0), SurfaceSize::new(360.0, 0.0)).is_none());
        assert!(to_percent(Vec2::ZERO, SurfaceSize::new(f32::NAN, 1.0)).is_none());
    }

    #[test]
    fn to_percent_does_not_clamp() {
        let surface = SurfaceSize::new(100.0, 50.0);
        let p = to_percent(Vec2::new(-10.0, 75.0), surface).expect("measured");
        assert_eq!(p, Percent::new(-10.0, 150.0));
    }

    #[test]
    fn clamp_handles_each_axis_and_nan() {
        assert_eq!(Percent::new(-5.0, 120.0).clamped(), Percent::new(0.0, 100.0));
        assert_eq!(Percent::new(f32::NAN, 42.0).clamped(), Percent::new(0.0, 42.0));
        assert!(Percent::new(100.0, 0.0).in_bounds());
        assert!(!Percent::new(100.01, 0.0).in_bounds());
    }

    #[test]
    fn center_is_half_dimensions() {
        assert_eq!(SurfaceSize::new(360.0, 200.0).center(), Vec2::new(180.0, 100.0));
    }
}
