//! Dashboard view state.

use super::sidebar::ResizeController;
use ratatui::layout::Rect;

/// Sidebar sections with the placeholder text of their card.
///
pub const SECTIONS: [(&str, &str); 11] = [
    ("Projects", "Project management coming soon..."),
    ("Ideas", "Brainstorm and save your film ideas here!"),
    (
        "Characterization",
        "Character profiles and arcs will be managed here.",
    ),
    ("Initial Drafts", "Upload or create your first drafts here."),
    ("Script", "Script writing and editing tools coming soon."),
    ("Storyboarding", "Visualize your storyboards here."),
    ("Shot Lists", "Organize your shot lists for each scene."),
    ("Call sheets", "Manage call sheets for your crew and cast."),
    ("Schedule", "Plan your production schedule here."),
    ("Team", "Add and manage your filmmaking team."),
    ("Resources", "Store and access important resources here."),
];

pub const SUB_GREETING: &str = "Welcome back! Here's your filmmaking dashboard.";

/// Return the greeting for the given local hour.
///
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning, Director",
        12..=17 => "Good afternoon, Director",
        _ => "Good evening, Director",
    }
}

/// Houses state owned by a mounted dashboard.
///
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    active_section: usize,
    resize: ResizeController,
    // Hit areas recorded by the last render.
    handle_area: Rect,
    sections_area: Rect,
    add_section_area: Rect,
}

impl DashboardState {
    pub fn active_section(&self) -> usize {
        self.active_section
    }

    pub fn active_section_name(&self) -> &'static str {
        SECTIONS[self.active_section].0
    }

    pub fn active_card_text(&self) -> &'static str {
        SECTIONS[self.active_section].1
    }

    pub fn select_section(&mut self, index: usize) -> &mut Self {
        if index < SECTIONS.len() {
            self.active_section = index;
        }
        self
    }

    pub fn next_section(&mut self) -> &mut Self {
        self.active_section = (self.active_section + 1) % SECTIONS.len();
        self
    }

    pub fn previous_section(&mut self) -> &mut Self {
        self.active_section = (self.active_section + SECTIONS.len() - 1) % SECTIONS.len();
        self
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    pub fn resize_mut(&mut self) -> &mut ResizeController {
        &mut self.resize
    }

    pub fn set_hit_areas(&mut self, handle: Rect, sections: Rect, add_section: Rect) -> &mut Self {
        self.handle_area = handle;
        self.sections_area = sections;
        self.add_section_area = add_section;
        self
    }

    pub fn is_on_handle(&self, column: u16, row: u16) -> bool {
        contains(self.handle_area, column, row)
    }

    pub fn is_on_add_section(&self, column: u16, row: u16) -> bool {
        contains(self.add_section_area, column, row)
    }

    /// Return the section rendered at the given cell, if any.
    ///
    pub fn section_at(&self, column: u16, row: u16) -> Option<usize> {
        if !contains(self.sections_area, column, row) {
            return None;
        }
        let index = usize::from(row - self.sections_area.y);
        (index < SECTIONS.len()).then_some(index)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
