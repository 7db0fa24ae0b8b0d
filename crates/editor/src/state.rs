//! Editor state and the event reducer.

use crate::drag::DragState;
use crate::event::{EditorEvent, IgnoreReason, Outcome};
use cardlayout_core::{
    to_pixel, Color, ElementId, FontSize, FontWeight, LogoPlacement, LogoPreset, Percent,
    SurfaceSize, TextElement, TextSpec, LOGO_SIZE_STEP,
};
use glam::Vec2;
use tracing::{debug, trace};

/// Complete state of one card being edited.
///
/// All mutation goes through the methods below (or [`EditorState::apply`]),
/// which keep element positions inside the card and allow a single drag.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    surface: SurfaceSize,
    elements: Vec<TextElement>,
    next_id: Option<u32>,
    logo: LogoPlacement,
    logo_step: u32,
    drag: DragState,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(SurfaceSize::new(0.0, 0.0))
    }
}

impl EditorState {
    /// Empty card of the given size. Pass a zero size to start unmeasured.
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            elements: Vec::new(),
            next_id: Some(1),
            logo: LogoPlacement::default(),
            logo_step: LOGO_SIZE_STEP,
            drag: DragState::Idle,
        }
    }

    /// Replace the starting logo placement.
    pub fn with_logo(mut self, logo: LogoPlacement) -> Self {
        self.logo = logo;
        self
    }

    /// Use `step` pixels for [`grow_logo`](Self::grow_logo) and
    /// [`shrink_logo`](Self::shrink_logo).
    pub fn with_logo_step(mut self, step: u32) -> Self {
        self.logo_step = step.max(1);
        self
    }

    /// Append elements in order.
    pub fn with_elements(mut self, specs: impl IntoIterator<Item = TextSpec>) -> Self {
        for spec in specs {
            if self.add_text(spec).is_none() {
                break;
            }
        }
        self
    }

    /// Card dimensions.
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    /// Look up an element.
    pub fn element(&self, id: ElementId) -> Option<&TextElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut TextElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Rendered pixel center of an element, once the surface is measured.
    pub fn element_pixel_position(&self, id: ElementId) -> Option<Vec2> {
        if !self.surface.is_measured() {
            return None;
        }
        self.element(id)
            .map(|e| to_pixel(e.position(), self.surface))
    }

    /// Logo placement.
    pub fn logo(&self) -> LogoPlacement {
        self.logo
    }

    /// Pixel increment used by the logo size buttons.
    pub fn logo_step(&self) -> u32 {
        self.logo_step
    }

    /// Drag controller state.
    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Record the card's rendered size.
    ///
    /// An in-progress drag keeps the size it started with.
    pub fn measure(&mut self, surface: SurfaceSize) -> Outcome {
        if self.surface == surface {
            return Outcome::Unchanged;
        }
        debug!(width = surface.width, height = surface.height, "surface measured");
        self.surface = surface;
        Outcome::Changed
    }

    /// Start dragging `id` from pointer location `pointer`.
    pub fn on_pointer_down(&mut self, id: ElementId, pointer: Vec2) -> Outcome {
        if let Some(active) = self.drag.active_element() {
            return ignored(IgnoreReason::AlreadyDragging(active));
        }
        let Some(element) = self.element(id) else {
            return ignored(IgnoreReason::UnknownElement(id));
        };
        let Some(drag) = DragState::begin(id, element.position(), pointer, self.surface) else {
            return ignored(IgnoreReason::Unmeasured);
        };
        debug!(element = %id, ?pointer, "drag started");
        self.drag = drag;
        Outcome::Changed
    }

    /// Move the dragged element with the pointer.
    pub fn on_pointer_move(&mut self, pointer: Vec2) -> Outcome {
        let Some((id, position)) = self.drag.target(pointer) else {
            return ignored(IgnoreReason::NotDragging);
        };
        match self.element_mut(id) {
            Some(element) => {
                let before = element.position();
                element.set_position(position);
                Outcome::from_changed(element.position() != before)
            }
            None => {
                self.drag = DragState::Idle;
                ignored(IgnoreReason::UnknownElement(id))
            }
        }
    }

    /// End the drag. Safe to call when idle.
    pub fn on_pointer_up(&mut self) -> Outcome {
        self.release("pointer up")
    }

    /// End the drag because the pointer left the card. Safe to call when idle.
    pub fn on_pointer_leave(&mut self) -> Outcome {
        self.release("pointer left surface")
    }

    fn release(&mut self, cause: &'static str) -> Outcome {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => ignored(IgnoreReason::NotDragging),
            DragState::Dragging { element, .. } => {
                debug!(element = %element, cause, "drag ended");
                Outcome::Changed
            }
        }
    }

    /// Append a new element and return its id.
    ///
    /// Returns `None` once every `u32` id has been handed out; ids are never reissued.
    pub fn add_text(&mut self, spec: TextSpec) -> Option<ElementId> {
        let raw = self.next_id?;
        self.next_id = raw.checked_add(1);
        let id = ElementId(raw);
        self.elements.push(TextElement::from_spec(id, spec));
        debug!(element = %id, "text element added");
        Some(id)
    }

    /// Delete an element. Ends the drag if it was the one being dragged.
    pub fn remove_text(&mut self, id: ElementId) -> Outcome {
        let Some(index) = self.elements.iter().position(|e| e.id == id) else {
            return ignored(IgnoreReason::UnknownElement(id));
        };
        self.elements.remove(index);
        if self.drag.active_element() == Some(id) {
            self.drag = DragState::Idle;
        }
        debug!(element = %id, "text element removed");
        Outcome::Changed
    }

    /// Replace an element's text.
    pub fn update_text(&mut self, id: ElementId, text: impl Into<String>) -> Outcome {
        let text = text.into();
        self.edit(id, |e| {
            let changed = e.text != text;
            e.text = text;
            changed
        })
    }

    /// Set an element's font size, clamped to the allowed range.
    pub fn set_font_size(&mut self, id: ElementId, size: u32) -> Outcome {
        let size = FontSize::new(size);
        self.edit(id, |e| {
            let changed = e.font_size != size;
            e.font_size = size;
            changed
        })
    }

    /// Flip an element between normal and bold.
    pub fn toggle_bold(&mut self, id: ElementId) -> Outcome {
        self.edit(id, |e| {
            e.font_weight = e.font_weight.toggled();
            true
        })
    }

    /// Set an element's font weight.
    pub fn set_font_weight(&mut self, id: ElementId, weight: FontWeight) -> Outcome {
        self.edit(id, |e| {
            let changed = e.font_weight != weight;
            e.font_weight = weight;
            changed
        })
    }

    /// Set an element's color.
    pub fn set_color(&mut self, id: ElementId, color: Color) -> Outcome {
        self.edit(id, |e| {
            let changed = e.color != color;
            e.color = color;
            changed
        })
    }

    /// Move an element to a percentage position, clamped to the card.
    pub fn set_position(&mut self, id: ElementId, position: Percent) -> Outcome {
        self.edit(id, |e| {
            let before = e.position();
            e.set_position(position);
            e.position() != before
        })
    }

    fn edit(&mut self, id: ElementId, f: impl FnOnce(&mut TextElement) -> bool) -> Outcome {
        match self.element_mut(id) {
            Some(element) => Outcome::from_changed(f(element)),
            None => ignored(IgnoreReason::UnknownElement(id)),
        }
    }

    /// Choose a logo anchor.
    pub fn set_placement(&mut self, preset: LogoPreset) -> Outcome {
        Outcome::from_changed(self.logo.set_preset(preset))
    }

    /// Enlarge the logo by one step. Stops silently at the maximum.
    pub fn grow_logo(&mut self) -> Outcome {
        Outcome::from_changed(self.logo.grow_size(self.logo_step))
    }

    /// Shrink the logo by one step. Stops silently at the minimum.
    pub fn shrink_logo(&mut self) -> Outcome {
        Outcome::from_changed(self.logo.shrink_size(self.logo_step))
    }

    /// Apply one event.
    pub fn apply(&mut self, event: &EditorEvent) -> Outcome {
        match event {
            EditorEvent::Measure { width, height } => {
                self.measure(SurfaceSize::new(*width, *height))
            }
            EditorEvent::PointerDown { element, x, y } => {
                self.on_pointer_down(*element, Vec2::new(*x, *y))
            }
            EditorEvent::PointerMove { x, y } => self.on_pointer_move(Vec2::new(*x, *y)),
            EditorEvent::PointerUp => self.on_pointer_up(),
            EditorEvent::PointerLeave => self.on_pointer_leave(),
            EditorEvent::AddText(spec) => match self.add_text(spec.clone()) {
                Some(id) => Outcome::Added(id),
                None => ignored(IgnoreReason::IdsExhausted),
            },
            EditorEvent::RemoveText { element } => self.remove_text(*element),
            EditorEvent::UpdateText { element, text } => self.update_text(*element, text.as_str()),
            EditorEvent::SetFontSize { element, size } => self.set_font_size(*element, *size),
            EditorEvent::ToggleBold { element } => self.toggle_bold(*element),
            EditorEvent::SetColor { element, color } => self.set_color(*element, color.clone()),
            EditorEvent::SetPosition { element, x, y } => {
                self.set_position(*element, Percent::new(*x, *y))
            }
            EditorEvent::SetPlacement { placement } => self.set_placement(*placement),
            EditorEvent::GrowLogo => self.grow_logo(),
            EditorEvent::ShrinkLogo => self.shrink_logo(),
        }
    }
}

/// Pure form of [`EditorState::apply`].
pub fn reduce(mut state: EditorState, event: &EditorEvent) -> EditorState {
    state.apply(event);
    state
}

fn ignored(reason: IgnoreReason) -> Outcome {
    trace!(%reason, "event ignored");
    Outcome::Ignored(reason)
}
