//! Positionable text labels.

use crate::error::ParseLayoutError;
use crate::surface::Percent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a text element. Never reused within an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Font size in points, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    /// Smallest allowed size.
    pub const MIN: u32 = 10;
    /// Largest allowed size.
    pub const MAX: u32 = 24;

    /// Clamp `size` into the allowed range.
    pub fn new(size: u32) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX))
    }

    /// Raw point size.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(14)
    }
}

impl From<u32> for FontSize {
    fn from(size: u32) -> Self {
        Self::new(size)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

/// Font weight of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// The other weight.
    pub fn toggled(self) -> Self {
        match self {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(FontWeight::Normal),
            "bold" => Ok(FontWeight::Bold),
            other => Err(ParseLayoutError::UnknownFontWeight(other.to_string())),
        }
    }
}

/// Text color. Passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Wrap a color string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the color text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("#1f2937")
    }
}

/// A text label placed on the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElement {
    /// Stable identifier.
    pub id: ElementId,
    /// Label content.
    pub text: String,
    /// Center of the label in percentage space. Clamped on every write.
    position: Percent,
    /// Font size.
    pub font_size: FontSize,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Text color.
    pub color: Color,
}

impl TextElement {
    /// Build an element from a description, clamping its position.
    pub fn from_spec(id: ElementId, spec: TextSpec) -> Self {
        Self {
            id,
            text: spec.text,
            position: spec.position.clamped(),
            font_size: spec.font_size,
            font_weight: spec.font_weight,
            color: spec.color,
        }
    }

    /// Current center position.
    pub fn position(&self) -> Percent {
        self.position
    }

    /// Move the element, clamping each axis to `[0, 100]`.
    pub fn set_position(&mut self, position: Percent) {
        self.position = position.clamped();
    }
}

/// Everything needed to create a [`TextElement`] except its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    /// Label content.
    pub text: String,
    /// Requested center position (clamped on insert).
    pub position: Percent,
    /// Font size.
    #[serde(default)]
    pub font_size: FontSize,
    /// Font weight.
    #[serde(default)]
    pub font_weight: FontWeight,
    /// Text color.
    #[serde(default)]
    pub color: Color,
}

impl TextSpec {
    /// Plain label at `position` with default styling.
    pub fn new(text: impl Into<String>, position: Percent) -> Self {
        Self {
            text: text.into(),
            position,
            font_size: FontSize::default(),
            font_weight: FontWeight::Normal,
            color: Color::default(),
        }
    }

    /// Set the font size (clamped).
    pub fn size(mut self, size: u32) -> Self {
        self.font_size = FontSize::new(size);
        self
    }

    /// Use bold weight.
    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    /// Set the color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Color::new(color);
        self
    }
}
