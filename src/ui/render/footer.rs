use super::*;
use crate::state::{CursorHint, State, View};
use crate::ui::widgets::styling;
use crate::ui::Palette;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for what currently has focus.
///
fn hints(state: &State) -> &'static [(&'static str, &'static str)] {
    if state.has_auth_modal() {
        return &[("Tab", "next field"), ("Enter", "submit"), ("Esc", "close")];
    }
    match state.current_view() {
        View::Landing => &[
            ("l", "login"),
            ("s", "sign up"),
            ("t", "theme"),
            ("d", "dashboard"),
            ("g", "log"),
            ("q", "quit"),
        ],
        View::Dashboard => &[
            ("j/k", "sections"),
            ("a", "add section"),
            ("drag │", "resize"),
            ("Esc", "back"),
            ("g", "log"),
            ("q", "quit"),
        ],
    }
}

fn hint_spans(hints: &[(&'static str, &'static str)], palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, styling::hotkey_style(palette)));
        spans.push(Span::styled(
            format!(": {}  ", action),
            styling::secondary_text_style(palette),
        ));
    }
    spans
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let palette = state.theme().palette();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(size);

    let resize = state.dashboard().resize();
    let left = match resize.cursor_hint() {
        Some(CursorHint::EwResize) if state.current_view() == View::Dashboard => {
            Line::from(vec![
                Span::styled(" ↔ ", styling::active_list_item_style(palette)),
                Span::styled(
                    format!("Resizing sidebar: {}px", resize.width()),
                    styling::normal_text_style(palette),
                ),
            ])
        }
        _ => Line::from(hint_spans(hints(state), palette)),
    };
    frame.render_widget(Paragraph::new(left), columns[0]);

    let theme = Paragraph::new(Line::from(Span::styled(
        format!("{} theme ", palette.name),
        styling::secondary_text_style(palette),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(theme, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthMode;
    use std::time::Instant;

    #[test]
    fn hints_follow_focus() {
        let mut state = State::default();
        state.navigate(View::Landing, Instant::now());
        assert_eq!(hints(&state)[0], ("l", "login"));

        state.open_auth_modal(AuthMode::Login);
        assert_eq!(hints(&state)[0], ("Tab", "next field"));

        state.navigate(View::Dashboard, Instant::now());
        assert_eq!(hints(&state)[0], ("j/k", "sections"));
    }
}
