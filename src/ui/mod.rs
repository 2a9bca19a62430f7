//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Frame layout for the landing and dashboard views
//! - Light and dark palettes
//! - Shared styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{Palette, ThemeFlag};
