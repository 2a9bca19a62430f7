use super::*;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::widgets::Block;

const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;

/// Render the mounted view, the optional log panel and the footer.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let palette = state.theme().palette();
    frame.render_widget(
        Block::default().style(styling::background_style(palette)),
        size,
    );

    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(log_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    match state.current_view() {
        View::Landing => landing(frame, rows[0], state),
        View::Dashboard => dashboard(frame, rows[0], state),
    }
    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[2], state);
}
