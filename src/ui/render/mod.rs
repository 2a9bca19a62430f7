mod all;
mod auth_modal;
mod dashboard;
mod footer;
mod landing;
mod log;

use self::log::log;
use super::*;
use auth_modal::auth_modal;
use dashboard::dashboard;
use footer::footer;
use landing::landing;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use all::all as render;

/// Return a rect of the given size centered in `area`, shrunk to fit.
///
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}
