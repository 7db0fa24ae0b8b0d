//! Editor input events and their outcomes.

use cardlayout_core::{Color, ElementId, LogoPreset, Percent, TextSpec};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single input to the editor.
///
/// Pointer coordinates are in surface pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The renderer reported the card's pixel size.
    Measure { width: f32, height: f32 },
    /// Primary button pressed over `element`.
    PointerDown { element: ElementId, x: f32, y: f32 },
    /// Pointer moved while over the surface.
    PointerMove { x: f32, y: f32 },
    /// Primary button released.
    PointerUp,
    /// Pointer left the surface.
    PointerLeave,
    /// Append a new text element.
    AddText(TextSpec),
    /// Delete an element.
    RemoveText { element: ElementId },
    /// Replace an element's text.
    UpdateText { element: ElementId, text: String },
    /// Set an element's font size (clamped).
    SetFontSize { element: ElementId, size: u32 },
    /// Flip between normal and bold.
    ToggleBold { element: ElementId },
    /// Change an element's color.
    SetColor { element: ElementId, color: Color },
    /// Move an element directly to a percentage position (clamped).
    SetPosition { element: ElementId, x: f32, y: f32 },
    /// Choose a logo anchor.
    SetPlacement { placement: LogoPreset },
    /// Enlarge the logo by the configured step.
    GrowLogo,
    /// Shrink the logo by the configured step.
    ShrinkLogo,
}

impl EditorEvent {
    /// Snake-case variant name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            EditorEvent::Measure { .. } => "measure",
            EditorEvent::PointerDown { .. } => "pointer_down",
            EditorEvent::PointerMove { .. } => "pointer_move",
            EditorEvent::PointerUp => "pointer_up",
            EditorEvent::PointerLeave => "pointer_leave",
            EditorEvent::AddText(_) => "add_text",
            EditorEvent::RemoveText { .. } => "remove_text",
            EditorEvent::UpdateText { .. } => "update_text",
            EditorEvent::SetFontSize { .. } => "set_font_size",
            EditorEvent::ToggleBold { .. } => "toggle_bold",
            EditorEvent::SetColor { .. } => "set_color",
            EditorEvent::SetPosition { .. } => "set_position",
            EditorEvent::SetPlacement { .. } => "set_placement",
            EditorEvent::GrowLogo => "grow_logo",
            EditorEvent::ShrinkLogo => "shrink_logo",
        }
    }

    /// Pointer-down helper.
    pub fn pointer_down(element: ElementId, pointer: Vec2) -> Self {
        EditorEvent::PointerDown {
            element,
            x: pointer.x,
            y: pointer.y,
        }
    }

    /// Pointer-move helper.
    pub fn pointer_move(pointer: Vec2) -> Self {
        EditorEvent::PointerMove {
            x: pointer.x,
            y: pointer.y,
        }
    }

    /// Set-position helper.
    pub fn set_position(element: ElementId, position: Percent) -> Self {
        EditorEvent::SetPosition {
            element,
            x: position.x,
            y: position.y,
        }
    }
}

/// Why an event had no effect.
///
/// These are expected races between rendering and input, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The event named an element that does not exist.
    UnknownElement(ElementId),
    /// The surface has no usable size yet.
    Unmeasured,
    /// A different drag already owns the pointer.
    AlreadyDragging(ElementId),
    /// Move or release with no drag in progress.
    NotDragging,
    /// Every element id has been used.
    IdsExhausted,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownElement(id) => write!(f, "unknown element {id}"),
            IgnoreReason::Unmeasured => f.write_str("surface not measured"),
            IgnoreReason::AlreadyDragging(id) => write!(f, "already dragging {id}"),
            IgnoreReason::NotDragging => f.write_str("no active drag"),
            IgnoreReason::IdsExhausted => f.write_str("element ids exhausted"),
        }
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Changed,
    /// Event was valid but left the state as it was (e.g. clamped at a bound).
    Unchanged,
    /// A new element was created.
    Added(ElementId),
    /// Event was dropped.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Whether the event was dropped.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }

    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Changed => f.write_str("changed"),
            Outcome::Unchanged => f.write_str("unchanged"),
            Outcome::Added(id) => write!(f, "added {id}"),
            Outcome::Ignored(reason) => write!(f, "ignored: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_use_kind_tag() {
        let event: EditorEvent =
            serde_json::from_str(r#"{"kind": "pointer_down", "element": 2, "x": 10.5, "y": 4}"#)
                .unwrap();
        assert_eq!(event, EditorEvent::pointer_down(ElementId(2), Vec2::new(10.5, 4.0)));
        assert_eq!(event.kind(), "pointer_down");

        let event: EditorEvent =
            serde_json::from_str(r#"{"kind": "set_placement", "placement": "top-right"}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::SetPlacement {
                placement: LogoPreset::TopRight
            }
        );

        let event: EditorEvent = serde_json::from_str(r#"{"kind": "grow_logo"}"#).unwrap();
        assert_eq!(event, EditorEvent::GrowLogo);
    }

    #[test]
    fn add_text_flattens_spec_fields() {
        let event: EditorEvent = serde_json::from_str(
            r#"{"kind": "add_text", "text": "Acme", "position": {"x": 10, "y": 20}, "font_weight": "bold"}"#,
        )
        .unwrap();
        match event {
            EditorEvent::AddText(spec) => {
                assert_eq!(spec.text, "Acme");
                assert_eq!(spec.position, Percent::new(10.0, 20.0));
                assert_eq!(spec.font_weight, cardlayout_core::FontWeight::Bold);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Changed.to_string(), "changed");
        assert_eq!(
            Outcome::Ignored(IgnoreReason::UnknownElement(ElementId(3))).to_string(),
            "ignored: unknown element #3"
        );
    }
}
