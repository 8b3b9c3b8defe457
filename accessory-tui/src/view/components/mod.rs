//! UI components

pub mod form;
pub mod list;
pub mod modal;
pub mod statusbar;
