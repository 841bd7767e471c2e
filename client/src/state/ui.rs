//! Local UI chrome state (theme, mobile menu) and navigation labels.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the card layout so the sidebar and
//! theme button can change without touching workspace state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use spatial::manifest::Section;

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Mobile navigation drawer is open.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation entry was used. The mobile drawer closes behind it.
    pub fn after_navigation(&mut self, mobile: bool) {
        if mobile {
            self.menu_open = false;
        }
    }

    /// Accessible label for the mobile menu button.
    pub fn menu_button_label(&self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }
}

/// Sidebar entry text: the section title, or "Close …" while its card is open.
pub fn nav_label(section: Section, open: bool) -> String {
    if open { format!("Close {}", section.title()) } else { section.title().to_owned() }
}

/// Glyph shown on a sidebar button.
pub fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Welcome => "⌂",
        Section::About => "☺",
        Section::Skills => "</>",
        Section::Experience => "▤",
        Section::Projects => "◈",
        Section::Education => "🎓",
        Section::Contact => "✉",
    }
}
