//! Logo placement presets and the bounded logo size.

use crate::error::ParseLayoutError;
use crate::surface::SurfaceSize;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest logo side in pixels.
pub const LOGO_SIZE_MIN: u32 = 30;
/// Largest logo side in pixels.
pub const LOGO_SIZE_MAX: u32 = 170;
/// Default grow/shrink increment in pixels.
pub const LOGO_SIZE_STEP: u32 = 10;
/// Distance kept from the card edges by the corner presets.
pub const LOGO_MARGIN: f32 = 16.0;

/// Named anchor for the logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPreset {
    /// Fixed margin from the top-left corner.
    #[default]
    TopLeft,
    /// Horizontally centered, flush to the top edge.
    TopCenter,
    /// Fixed margin from the top-right corner.
    TopRight,
    /// Geometric center of the card.
    Center,
}

impl LogoPreset {
    /// Every preset, in menu order.
    pub const ALL: [LogoPreset; 4] = [
        LogoPreset::TopLeft,
        LogoPreset::TopCenter,
        LogoPreset::TopRight,
        LogoPreset::Center,
    ];

    /// Kebab-case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoPreset::TopLeft => "top-left",
            LogoPreset::TopCenter => "top-center",
            LogoPreset::TopRight => "top-right",
            LogoPreset::Center => "center",
        }
    }
}

impl fmt::Display for LogoPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoPreset {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LogoPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| ParseLayoutError::UnknownPlacement(s.to_string()))
    }
}

/// Pixel rectangle of the logo on a measured card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogoRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Side length (the logo is square).
    pub size: f32,
}

impl LogoRect {
    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + Vec2::splat(self.size * 0.5)
    }
}

/// Current logo preset and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoPlacement {
    /// Anchor preset.
    pub preset: LogoPreset,
    size: u32,
}

impl Default for LogoPlacement {
    fn default() -> Self {
        Self::new(LogoPreset::TopLeft, 80)
    }
}

impl LogoPlacement {
    /// Create a placement, clamping `size` into range.
    pub fn new(preset: LogoPreset, size: u32) -> Self {
        Self {
            preset,
            size: size.clamp(LOGO_SIZE_MIN, LOGO_SIZE_MAX),
        }
    }

    /// Logo side in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Switch to another anchor. Returns whether anything changed.
    pub fn set_preset(&mut self, preset: LogoPreset) -> bool {
        let changed = self.preset != preset;
        self.preset = preset;
        changed
    }

    /// Enlarge by `delta`, saturating at [`LOGO_SIZE_MAX`].
    pub fn grow_size(&mut self, delta: u32) -> bool {
        self.resize(self.size.saturating_add(delta))
    }

    /// Shrink by `delta`, saturating at [`LOGO_SIZE_MIN`].
    pub fn shrink_size(&mut self, delta: u32) -> bool {
        self.resize(self.size.saturating_sub(delta))
    }

    fn resize(&mut self, size: u32) -> bool {
        let size = size.clamp(LOGO_SIZE_MIN, LOGO_SIZE_MAX);
        let changed = size != self.size;
        self.size = size;
        changed
    }

    /// Resolve the preset to a pixel rectangle on `surface`.
    pub fn rect(&self, surface: SurfaceSize) -> LogoRect {
        let side = self.size as f32;
        let (x, y) = match self.preset {
            LogoPreset::TopLeft => (LOGO_MARGIN, LOGO_MARGIN),
            LogoPreset::TopCenter => ((surface.width - side) * 0.5, 0.0),
            LogoPreset::TopRight => (surface.width - side - LOGO_MARGIN, LOGO_MARGIN),
            LogoPreset::Center => {
                let origin = surface.center() - Vec2::splat(side * 0.5);
                (origin.x, origin.y)
            }
        };
        LogoRect { x, y, size: side }
    }
}
