//! User preferences exposed on the settings screen.
//!
//! Preferences live in memory for the lifetime of the process. Initial values
//! come from the `[preferences]` config table.

use serde::{Deserialize, Serialize};

/// A single toggleable preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    DarkMode,
    Notifications,
}

impl Preference {
    pub const ALL: [Preference; 2] = [Preference::DarkMode, Preference::Notifications];

    pub fn label(self) -> &'static str {
        match self {
            Preference::DarkMode => "Dark mode",
            Preference::Notifications => "Notifications",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preference::DarkMode => "Use the dark colour palette",
            Preference::Notifications => "Announce new posts in the status bar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
        }
    }
}

impl Preferences {
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::DarkMode => self.dark_mode,
            Preference::Notifications => self.notifications,
        }
    }

    /// Flips `pref` and returns its new value.
    pub fn toggle(&mut self, pref: Preference) -> bool {
        let slot = match pref {
            Preference::DarkMode => &mut self.dark_mode,
            Preference::Notifications => &mut self.notifications,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target() {
        let mut prefs = Preferences::default();
        assert!(!prefs.toggle(Preference::DarkMode));
        assert!(!prefs.dark_mode);
        assert!(prefs.notifications);
        assert!(prefs.toggle(Preference::DarkMode));
        assert!(prefs.get(Preference::DarkMode));
    }
}
