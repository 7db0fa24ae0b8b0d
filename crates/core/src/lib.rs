#![warn(missing_docs)]
//! Core vocabulary for the card layout editor: surface geometry, text
//! elements and logo placement.

pub mod element;
pub mod error;
pub mod logo;
pub mod surface;

// Re-export commonly used types
pub use element::{Color, ElementId, FontSize, FontWeight, TextElement, TextSpec};
pub use error::ParseLayoutError;
pub use logo::{
    LogoPlacement, LogoPreset, LogoRect, LOGO_MARGIN, LOGO_SIZE_MAX, LOGO_SIZE_MIN,
    LOGO_SIZE_STEP,
};
pub use surface::{to_percent, to_pixel, Percent, SurfaceSize, PERCENT_MAX};
