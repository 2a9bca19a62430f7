use super::*;
use crate::state::{AuthForm, AuthMode, FormField, MessageKind, State};
use crate::ui::widgets::styling;
use crate::ui::Palette;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const MODAL_WIDTH: u16 = 52;
const FIELD_HEIGHT: u16 = 3;
const SECRET_MASK: char = '•';

/// Render the authentication modal centered over the landing view.
///
pub fn auth_modal(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.auth_form() {
        Some(form) => form,
        None => return,
    };
    let palette = state.theme().palette();
    let links = links(form.mode());
    let field_count = form.mode().fields().len() as u16;

    // Borders, fields, submit, message, links, help
    let height = 2 + field_count * FIELD_HEIGHT + 2 + 2 + links.len() as u16 + 2;
    let area = centered_rect(MODAL_WIDTH, height, size);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", form.mode().title()),
            styling::active_block_title_style(palette),
        ))
        .title_alignment(Alignment::Center)
        .border_style(styling::active_block_border_style(palette))
        .style(styling::background_style(palette));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .mode()
        .fields()
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.extend([
        Constraint::Length(1), // Submit
        Constraint::Length(2), // Message
        Constraint::Length(links.len() as u16),
        Constraint::Min(0),
        Constraint::Length(1), // Help
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (index, field) in form.mode().fields().iter().enumerate() {
        input(frame, rows[index], form, *field, palette);
    }

    let n = form.mode().fields().len();
    submit(frame, rows[n], form, palette);
    message(frame, rows[n + 1], form, palette);

    let link_lines: Vec<Line> = links
        .iter()
        .map(|(prompt, key)| {
            Line::from(vec![
                Span::styled(*prompt, styling::secondary_text_style(palette)),
                Span::styled(format!(" {}", key), styling::hotkey_style(palette)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(link_lines).alignment(Alignment::Center),
        rows[n + 2],
    );

    let help = Paragraph::new(Line::from(Span::styled(
        "Tab: next field  Enter: submit  Esc: close",
        styling::secondary_text_style(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(help, rows[n + 4]);
}

fn input(frame: &mut Frame, size: Rect, form: &AuthForm, field: FormField, palette: &Palette) {
    let focused = form.focused_field() == field;
    let border_style = if focused {
        styling::active_block_border_style(palette)
    } else {
        styling::normal_block_border_style(palette)
    };
    let value = form.fields().get(field);
    let content = if value.is_empty() {
        Span::styled(
            field.placeholder(),
            Style::default().fg(palette.title.to_color()),
        )
    } else if field.is_secret() {
        Span::styled(mask(value), styling::normal_text_style(palette))
    } else {
        Span::styled(value.to_string(), styling::normal_text_style(palette))
    };
    let mut spans = vec![content];
    if focused {
        spans.push(Span::styled("▏", styling::active_list_item_style(palette)));
    }
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(widget, size);
}

fn submit(frame: &mut Frame, size: Rect, form: &AuthForm, palette: &Palette) {
    let label = if form.is_pending() {
        "Please wait...".to_string()
    } else {
        format!("[ {} ]", form.mode().submit_label())
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default()
            .fg(palette.primary.to_color())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(widget, size);
}

fn message(frame: &mut Frame, size: Rect, form: &AuthForm, palette: &Palette) {
    let message = match form.message() {
        Some(message) => message,
        None => return,
    };
    let style = match message.kind {
        MessageKind::Error => styling::error_text_style(palette),
        MessageKind::Info => styling::active_list_item_style(palette),
    };
    let widget = Paragraph::new(Span::styled(message.text.as_str(), style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, size);
}

/// Return the mode switches offered below the form with their keys.
///
fn links(mode: AuthMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AuthMode::Login => &[
            ("Forgot Password?", "Ctrl-F"),
            ("Don't have an account? Sign Up", "Ctrl-S"),
        ],
        AuthMode::Signup => &[("Already have an account? Login", "Ctrl-L")],
        AuthMode::ForgotPassword => &[("Remember your password? Login", "Ctrl-L")],
    }
}

fn mask(value: &str) -> String {
    std::iter::repeat(SECRET_MASK)
        .take(value.chars().count())
        .collect()
}
