use super::*;
use crate::state::{greeting, pixels_to_columns, State, SECTIONS, SUB_GREETING};
use crate::ui::widgets::styling;
use crate::ui::Palette;
use chrono::Timelike;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

pub const APP_NAME: &str = "sweet";
pub const ADD_SECTION_LABEL: &str = "+ Add New Section";

// Rows within the sidebar
const ADD_SECTION_ROW: u16 = 2;
const SECTIONS_ROW: u16 = 4;

/// Render the dashboard and record where its sidebar controls landed so
/// pointer events can be hit-tested against the last frame.
///
pub fn dashboard(frame: &mut Frame, size: Rect, state: &mut State) {
    let palette = state.theme().palette();
    let resize = state.dashboard().resize();
    let sidebar_columns = pixels_to_columns(resize.effective_width());
    let compact = resize.is_compact();
    let dragging = resize.is_dragging();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_columns),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(size);

    sidebar(frame, columns[0], state, compact);
    handle(frame, columns[1], palette, dragging);
    main(frame, columns[2], state);

    let sidebar_area = columns[0];
    let handle_area = if compact { Rect::default() } else { columns[1] };
    state.dashboard_mut().set_hit_areas(
        handle_area,
        sidebar_row(sidebar_area, SECTIONS_ROW, SECTIONS.len() as u16),
        sidebar_row(sidebar_area, ADD_SECTION_ROW, 1),
    );
}

fn sidebar(frame: &mut Frame, size: Rect, state: &State, compact: bool) {
    let palette = state.theme().palette();
    let active = state.dashboard().active_section();

    let name = if compact { &APP_NAME[..1] } else { APP_NAME };
    frame.render_widget(
        Paragraph::new(Span::styled(name, styling::active_block_title_style(palette))),
        sidebar_row(size, 0, 1),
    );

    let add = if compact { "+" } else { ADD_SECTION_LABEL };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(add, styling::normal_text_style(palette)),
            Span::styled(if compact { "" } else { " a" }, styling::hotkey_style(palette)),
        ])),
        sidebar_row(size, ADD_SECTION_ROW, 1),
    );

    let items: Vec<ListItem> = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, &(section, _))| {
            let label = if compact { &section[..1] } else { section };
            let style = if index == active {
                styling::active_list_item_style(palette)
            } else {
                styling::secondary_text_style(palette)
            };
            ListItem::new(Span::styled(label, style))
        })
        .collect();
    frame.render_widget(
        List::new(items),
        sidebar_row(size, SECTIONS_ROW, SECTIONS.len() as u16),
    );
}

/// Render the drag handle, highlighted while a resize is active.
///
fn handle(frame: &mut Frame, size: Rect, palette: &Palette, dragging: bool) {
    let line = if dragging {
        Line::styled("┃", styling::active_block_border_style(palette))
    } else {
        Line::styled("│", styling::normal_block_border_style(palette))
    };
    let lines = vec![line; usize::from(size.height)];
    frame.render_widget(Paragraph::new(lines), size);
}

fn main(frame: &mut Frame, size: Rect, state: &State) {
    let palette = state.theme().palette();
    let dashboard = state.dashboard();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .margin(1)
        .horizontal_margin(3)
        .split(size);

    let hour = chrono::Local::now().hour();
    frame.render_widget(
        Paragraph::new(Span::styled(
            greeting(hour),
            Style::default()
                .fg(palette.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            SUB_GREETING,
            styling::secondary_text_style(palette),
        )),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            dashboard.active_section_name(),
            styling::active_list_item_style(palette),
        )),
        rows[2],
    );

    let card = Paragraph::new(Span::styled(
        dashboard.active_card_text(),
        styling::normal_text_style(palette),
    ))
    .alignment(Alignment::Left)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(palette))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(card, rows[3]);
}

/// Return `height` rows of the sidebar starting at `row`, clipped to it.
///
fn sidebar_row(sidebar: Rect, row: u16, height: u16) -> Rect {
    if row >= sidebar.height {
        return Rect::new(sidebar.x, sidebar.y, 0, 0);
    }
    let x = sidebar.x + 1;
    let width = sidebar.width.saturating_sub(2);
    let height = height.min(sidebar.height - row);
    Rect::new(x, sidebar.y + row, width, height)
}
