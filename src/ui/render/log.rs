use super::*;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    text::Span,
    widgets::{Block, Borders, List, ListItem},
};

/// Render log widget according to state, newest entries at the bottom.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let palette = state.theme().palette();
    let block = Block::default()
        .title(Span::styled(
            "Log (g: hide)",
            styling::active_block_title_style(palette),
        ))
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette));

    let visible = usize::from(size.height.saturating_sub(2));
    let entries = state.log_entries();
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries[skip..]
        .iter()
        .map(|entry| {
            ListItem::new(Span::styled(
                entry.as_str(),
                styling::normal_text_style(palette),
            ))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(palette))
        .block(block);
    frame.render_widget(list, size);
}
