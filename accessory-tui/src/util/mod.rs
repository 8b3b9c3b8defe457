//! Utilities: terminal lifecycle and currency formatting

pub mod currency;
mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
