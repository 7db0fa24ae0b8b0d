//! Pointer drag tracking.
//!
//! At most one element is dragged at a time. The grab offset and the surface
//! size are captured when the drag starts and stay fixed until release, so
//! the element moves exactly with the pointer and a resize mid-drag cannot
//! shift the coordinate frame.

use cardlayout_core::{to_percent, to_pixel, ElementId, Percent, SurfaceSize};
use glam::Vec2;

/// Drag controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// An element is following the pointer.
    Dragging {
        /// Element being moved.
        element: ElementId,
        /// Pointer position minus the element's pixel position at grab time.
        grab_offset: Vec2,
        /// Surface dimensions at grab time.
        surface: SurfaceSize,
    },
}

impl DragState {
    /// Start dragging `element`, currently centered at `element_position`,
    /// from pointer location `pointer`.
    ///
    /// Returns `None` when the surface has not been measured yet.
    pub fn begin(
        element: ElementId,
        element_position: Percent,
        pointer: Vec2,
        surface: SurfaceSize,
    ) -> Option<Self> {
        if !surface.is_measured() {
            return None;
        }
        let element_pixel = to_pixel(element_position, surface);
        Some(DragState::Dragging {
            element,
            grab_offset: pointer - element_pixel,
            surface,
        })
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Element being dragged, if any.
    pub fn active_element(&self) -> Option<ElementId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { element, .. } => Some(*element),
        }
    }

    /// Where the dragged element lands for pointer location `pointer`,
    /// clamped to the card.
    ///
    /// Returns `None` while idle.
    pub fn target(&self, pointer: Vec2) -> Option<(ElementId, Percent)> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging {
                element,
                grab_offset,
                surface,
            } => {
                let percent = to_percent(pointer - grab_offset, surface)?;
                Some((element, percent.clamped()))
            }
        }
    }
}
