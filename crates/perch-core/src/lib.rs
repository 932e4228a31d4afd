//! # Controls, Bindings, and Render Collaborators
//!
//! Perch draws parameter panels on top of a live 3D surface. This crate is
//! the model half: it knows what a control is, which caller-owned value it
//! steers, and what the renderer collaborators look like — but it never
//! touches pixels itself.
//!
//! - `Binding<T>` — cloneable handle to a caller-owned value.
//! - `BoundValue` — tagged union declared at add-time; a control's kind is
//!   resolved from it once and never re-inferred.
//! - `Control` — one panel entry: kind, title, active area, options,
//!   callbacks, dirty/active/focus flags.
//! - `ChromeRenderer` / `RenderContext` — the external rasterizer and draw
//!   surface the panel drives.
//!
//! ## Bindings
//!
//! A control does not own its value; it observes and mutates a shared
//! handle the caller keeps:
//!
//! ```rust
//! use perch_core::binding;
//!
//! let exposure = binding(0.5f32);
//! exposure.set(0.8);
//! assert_eq!(exposure.get(), 0.8);
//! ```
//!
//! The panel layer (`perch-gui`) writes through these handles from its
//! input state machine; `onchange` callbacks fire synchronously with a
//! `ParamValue` snapshot of the new value.

pub mod binding;
pub mod control;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render_api;
pub mod tests;
pub mod value;

pub use binding::*;
pub use control::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use value::*;
