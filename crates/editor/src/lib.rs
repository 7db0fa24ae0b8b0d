//! Business-card layout editor.
//!
//! Text labels sit on a card in percentage coordinates and are moved with
//! pointer drags; the logo snaps to one of a few anchor presets. The editor
//! is a plain state struct driven by [`EditorEvent`]s, independent of any UI
//! toolkit.
//!
//! # Example
//!
//! ```
//! use cardlayout_editor::{business_card, EditorEvent, DEFAULT_SURFACE};
//! use cardlayout_core::ElementId;
//! use glam::Vec2;
//!
//! let mut editor = business_card(DEFAULT_SURFACE);
//! let company = ElementId(1);
//!
//! editor.apply(&EditorEvent::pointer_down(company, Vec2::new(240.0, 50.0)));
//! editor.apply(&EditorEvent::pointer_move(Vec2::new(300.0, 80.0)));
//! editor.apply(&EditorEvent::PointerUp);
//!
//! let moved = editor.element(company).unwrap().position();
//! assert!((moved.x - 82.22).abs() < 0.01);
//! ```

pub mod drag;
pub mod event;
pub mod snapshot;
pub mod state;
pub mod template;

// Re-export commonly used types
pub use drag::DragState;
pub use event::{EditorEvent, IgnoreReason, Outcome};
pub use snapshot::{LayoutSnapshot, LogoSnapshot};
pub use state::{reduce, EditorState};
pub use template::{business_card, business_card_template, DEFAULT_SURFACE};
