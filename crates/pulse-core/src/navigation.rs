//! Top-level section selection.

use crate::feed::FeedKind;

/// A top-level section reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ForYou,
    Following,
    Profile,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 4] = [
        Section::ForYou,
        Section::Following,
        Section::Profile,
        Section::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::ForYou => "For You",
            Section::Following => "Following",
            Section::Profile => "Profile",
            Section::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::ForYou => 0,
            Section::Following => 1,
            Section::Profile => 2,
            Section::Settings => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section in sidebar order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in sidebar order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The feed shown by this section, if it is a feed section.
    pub fn feed(self) -> Option<FeedKind> {
        match self {
            Section::ForYou => Some(FeedKind::ForYou),
            Section::Following => Some(FeedKind::Following),
            Section::Profile | Section::Settings => None,
        }
    }
}

/// Direction of the cosmetic slide when switching sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// New pane enters from below (moving down the sidebar).
    Down,
    /// New pane enters from above.
    Up,
}

/// A selection change reported by [`Navigation::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: Option<Section>,
    pub to: Section,
}

impl SectionChange {
    pub fn direction(&self) -> SlideDirection {
        match self.from {
            Some(from) if from.index() > self.to.index() => SlideDirection::Up,
            _ => SlideDirection::Down,
        }
    }
}

/// Holds the single active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    selected: Option<Section>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// Starts on the "For You" feed.
    pub fn new() -> Self {
        Self {
            selected: Some(Section::ForYou),
        }
    }

    /// Starts with nothing selected.
    pub fn none() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<Section> {
        self.selected
    }

    /// Selects `section`. Re-selecting the current section is a no-op and
    /// returns `None`.
    pub fn select(&mut self, section: Section) -> Option<SectionChange> {
        if self.selected == Some(section) {
            return None;
        }
        let from = self.selected.replace(section);
        Some(SectionChange { from, to: section })
    }
}
