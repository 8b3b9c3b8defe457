//! Model layer: application state
//!
//! Single source of truth for the UI. Pure data structures only; all
//! mutation happens in the update layer.

mod app;
mod focus;

pub mod state;

pub use app::App;
pub use focus::FocusPanel;
