//! View layer: UI rendering
//!
//! Reads the model and draws; never mutates state. Re-rendered from scratch
//! every frame, so derived values (subtotal, form title) are recomputed
//! here.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
