use super::*;
use crate::state::{State, TaglineFrame, TaglinePhase, TAGLINES};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

pub const HEADING: &str = "{sweet}.";

const TAGLINE_HEIGHT: u16 = 5;

/// Render the landing view with the auth modal on top when open.
///
pub fn landing(frame: &mut Frame, size: Rect, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(TAGLINE_HEIGHT),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(size);

    header(frame, rows[0], state);

    let palette = state.theme().palette();
    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default()
            .fg(palette.text.to_color())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[2]);

    if state.tagline().is_running() {
        tagline(frame, rows[3], state.tagline().frame(Instant::now()), state);
    }

    if state.has_auth_modal() {
        auth_modal(frame, size, state);
    }
}

fn header(frame: &mut Frame, size: Rect, state: &State) {
    let palette = state.theme().palette();
    let toggle = if state.theme().is_dark() { "☀" } else { "☾" };
    let line = Line::from(vec![
        Span::styled(toggle, styling::normal_text_style(palette)),
        Span::styled(" t", styling::hotkey_style(palette)),
        Span::raw("   "),
        Span::styled("Login", styling::normal_text_style(palette)),
        Span::styled(" l", styling::hotkey_style(palette)),
        Span::raw("   "),
        Span::styled("Sign Up", styling::normal_text_style(palette)),
        Span::styled(" s", styling::hotkey_style(palette)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), size);
}

fn tagline(frame: &mut Frame, size: Rect, tagline: TaglineFrame, state: &State) {
    if size.height == 0 {
        return;
    }
    let palette = state.theme().palette();
    let rest_row = size.height / 2;
    let (offset, opacity) = placement(tagline, rest_row);
    let row = i32::from(rest_row) + offset;
    if row < 0 || row >= i32::from(size.height) {
        return;
    }
    let color = palette.background.blend(palette.title, opacity * 0.9);
    let text = TAGLINES[tagline.index].to_uppercase();
    let area = Rect::new(size.x, size.y + row as u16, size.width, 1);
    let widget = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color.to_color()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Return the row offset from rest and the opacity of a tagline frame.
/// Exiting slides up while fading out, entering rises from below while
/// fading in.
///
fn placement(tagline: TaglineFrame, travel: u16) -> (i32, f32) {
    let travel = f32::from(travel);
    match tagline.phase {
        TaglinePhase::Exiting => (
            -(tagline.progress * travel).round() as i32,
            1.0 - tagline.progress,
        ),
        TaglinePhase::Entering => (
            ((1.0 - tagline.progress) * travel).round() as i32,
            tagline.progress,
        ),
        TaglinePhase::Visible => (0, 1.0),
    }
}
