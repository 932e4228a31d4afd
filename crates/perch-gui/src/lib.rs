//! # The Panel
//!
//! A `Panel` is an ordered stack of controls drawn on top of a 3D surface.
//! Controls are appended by factory calls, steered by the input state
//! machine, rasterized by an external [`ChromeRenderer`] only when dirty,
//! and persisted by title.
//!
//! ```rust
//! use perch_core::{binding, BoundValue, ControlOptions};
//! use perch_gui::Panel;
//!
//! let mut panel = Panel::new(1280.0, 720.0, 1.0);
//! let exposure = binding(0.5f32);
//!
//! panel.add_header("Scene");
//! let id = panel
//!     .add_param("Exposure", BoundValue::Number(exposure.clone()), ControlOptions::default())
//!     .unwrap();
//! panel.set_onchange(id, |v| log::debug!("exposure -> {v:?}"));
//! ```
//!
//! Event handlers (`pointer_down`, `pointer_drag`, `pointer_up`,
//! `key_down`, `text_input`) return `true` when the event was consumed and
//! must not reach layers underneath the panel.

pub mod draw;
pub mod hit;
pub mod input;
pub mod panel;
pub mod persist;

pub use panel::{ControlId, Panel};

pub use perch_core::{
    Binding, BoundValue, ChromeRenderer, Control, ControlKind, ControlOptions, Key, KeyEvent,
    PaletteImage, PanelError, ParamValue, PointerEvent, QuadParams, RadioItem, Rect,
    RenderContext, RenderStyle, TextInputEvent, TextureHandle, TextureItem, Vec2, binding,
};
