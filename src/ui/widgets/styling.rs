use crate::ui::theme::Palette;
use ratatui::style::{Modifier, Style};

/// Return the style filling the whole frame.
///
pub fn background_style(palette: &Palette) -> Style {
    Style::default()
        .bg(palette.background.to_color())
        .fg(palette.text.to_color())
}

/// Return the border style for active blocks.
///
pub fn active_block_border_style(palette: &Palette) -> Style {
    Style::default().fg(palette.primary.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(palette: &Palette) -> Style {
    Style::default().fg(palette.border.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the selected list item.
///
pub fn active_list_item_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text.to_color())
}

/// Return the style for supporting text.
///
pub fn secondary_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.secondary.to_color())
}

/// Return the style for the key hints shown next to actions.
///
pub fn hotkey_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.button_hover.to_color())
        .add_modifier(Modifier::BOLD)
}

pub fn error_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.error.to_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn styles_follow_palette() {
        let dark = background_style(&Palette::DARK);
        assert_eq!(dark.bg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(dark.fg, Some(Color::Rgb(255, 255, 255)));

        let light = active_block_border_style(&Palette::LIGHT);
        assert_eq!(light.fg, Some(Color::Rgb(26, 26, 26)));
    }
}
