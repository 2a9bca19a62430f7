//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that owns every mounted view's state
//! - Navigation types (View)
//! - Theme store, authentication form, tagline rotator and sidebar resize
//! - State error handling

mod auth_form;
mod dashboard;
mod error;
mod navigation;
mod sidebar;
mod tagline;
mod theme_store;

pub use auth_form::{AuthForm, AuthMode, FormField, MessageKind};
pub use dashboard::{greeting, SECTIONS, SUB_GREETING};
pub use error::StateError;
pub use navigation::View;
pub use sidebar::{pixels_to_columns, CursorHint, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH};
pub use tagline::{TaglineFrame, TaglinePhase, TAGLINES};
pub use theme_store::{ThemeStorage, ThemeStore};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
