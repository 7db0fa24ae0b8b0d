//! Errors for parsing layout names.

use thiserror::Error;

/// Errors raised when parsing layout vocabulary from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLayoutError {
    /// Not one of `top-left`, `top-center`, `top-right`, `center`.
    #[error("unknown logo placement '{0}' (expected top-left, top-center, top-right or center)")]
    UnknownPlacement(String),
    /// Not one of `normal`, `bold`.
    #[error("unknown font weight '{0}' (expected normal or bold)")]
    UnknownFontWeight(String),
}
