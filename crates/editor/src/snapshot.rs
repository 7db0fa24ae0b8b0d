//! Render-facing view of the editor.

use crate::state::EditorState;
use cardlayout_core::{ElementId, LogoPreset, LogoRect, SurfaceSize, TextElement};
use serde::Serialize;

/// Everything a renderer needs to draw the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    /// Card size.
    pub surface: SurfaceSize,
    /// Logo anchor, size and resolved rectangle.
    pub logo: LogoSnapshot,
    /// Text elements in draw order.
    pub elements: Vec<TextElement>,
    /// Element currently being dragged.
    pub dragging: Option<ElementId>,
}

/// Logo part of a [`LayoutSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoSnapshot {
    /// Anchor preset.
    pub preset: LogoPreset,
    /// Side length in pixels.
    pub size: u32,
    /// Pixel rectangle; absent until the surface is measured.
    pub rect: Option<LogoRect>,
}

impl LayoutSnapshot {
    /// Capture the current editor state.
    pub fn capture(state: &EditorState) -> Self {
        let logo = state.logo();
        let surface = state.surface();
        Self {
            surface,
            logo: LogoSnapshot {
                preset: logo.preset,
                size: logo.size(),
                rect: surface.is_measured().then(|| logo.rect(surface)),
            },
            elements: state.elements().to_vec(),
            dragging: state.drag().active_element(),
        }
    }
}

impl EditorState {
    /// Shorthand for [`LayoutSnapshot::capture`].
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlayout_core::{Percent, TextSpec};
    use serde_json::json;

    #[test]
    fn snapshot_serializes_render_fields() {
        let mut state = EditorState::new(SurfaceSize::new(400.0, 200.0));
        state.add_text(TextSpec::new("Acme", Percent::new(50.0, 25.0)).size(18).bold());

        let value = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(value["logo"]["preset"], json!("top-left"));
        assert_eq!(value["logo"]["rect"]["x"], json!(16.0));
        assert_eq!(value["elements"][0]["id"], json!(1));
        assert_eq!(value["elements"][0]["font_size"], json!(18));
        assert_eq!(value["elements"][0]["font_weight"], json!("bold"));
        assert_eq!(value["elements"][0]["position"]["x"], json!(50.0));
        assert_eq!(value["dragging"], json!(null));
    }

    #[test]
    fn unmeasured_snapshot_has_no_logo_rect() {
        let state = EditorState::default();
        assert_eq!(state.snapshot().logo.rect, None);
    }
}
