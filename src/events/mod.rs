//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: authentication requests
//! - Terminal events: keyboard, mouse, resize and timer ticks

pub mod network;
pub mod terminal;
