//! The fixed set of content sections a session starts with.
//!
//! Each section owns its display title, desktop placement relative to the
//! viewport center, desktop default size, and optional accent color. The
//! manifest order is the navigation order.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// Stable identifier of a card; one per content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Welcome,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Welcome,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Contact,
    ];

    /// Key used in storage and navigation.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    /// Title shown in the card's title bar and the navigation tooltip.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::About => "About Me",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    /// Desktop placement, as an offset from the viewport center.
    #[must_use]
    pub fn desktop_offset(self) -> Point {
        match self {
            Self::Welcome => Point::new(-300.0, -250.0),
            Self::About => Point::new(-400.0, -300.0),
            Self::Skills => Point::new(150.0, -250.0),
            Self::Experience => Point::new(-500.0, 50.0),
            Self::Projects => Point::new(100.0, 150.0),
            Self::Education => Point::new(-200.0, 200.0),
            Self::Contact => Point::new(200.0, -50.0),
        }
    }

    /// Desktop size before the user resizes anything.
    #[must_use]
    pub fn desktop_size(self) -> Size {
        match self {
            Self::Welcome => Size::new(600.0, 500.0),
            Self::About | Self::Education => Size::new(450.0, 500.0),
            Self::Skills => Size::new(550.0, 550.0),
            Self::Experience => Size::new(500.0, 500.0),
            Self::Projects => Size::new(500.0, 550.0),
            Self::Contact => Size::new(700.0, 550.0),
        }
    }

    #[must_use]
    pub fn accent_color(self) -> Option<&'static str> {
        match self {
            Self::Welcome => Some("#2196f3"),
            _ => None,
        }
    }

    /// Whether the card is open at the start of a session.
    #[must_use]
    pub fn starts_visible(self) -> bool {
        self == Self::Welcome
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for a navigation key that names no section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}
