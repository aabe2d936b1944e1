//! Application state.
//!
//! All UI state lives in a single owned [`AppState`]. Render functions take it
//! by shared reference; only the reducer in `update.rs` mutates it.
//!
//! ```text
//! AppState
//! ├── navigation: Navigation    (active section)
//! ├── focus: Focus             (sidebar or detail pane)
//! ├── feeds: Feeds             (one FeedView per feed section)
//! ├── settings: SettingsState  (settings cursor)
//! ├── preferences: Preferences (dark mode, notifications)
//! ├── task_seq / tasks         (page load task handles)
//! ├── transition               (cosmetic section slide)
//! └── notice                   (transient status line message)
//! ```

use std::time::Instant;

use pulse_core::config::Config;
use pulse_core::feed::FeedKind;
use pulse_core::navigation::{Navigation, Section};
use pulse_core::preferences::Preferences;
use pulse_core::profile::Profile;

use crate::common::{TaskSeq, Tasks, Theme};
use crate::feed::Feeds;
use crate::settings::SettingsState;
use crate::sidebar::SlideTransition;
use crate::statusline::Notice;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Detail,
}

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub navigation: Navigation,
    pub focus: Focus,
    pub feeds: Feeds,
    pub settings: SettingsState,
    pub preferences: Preferences,
    pub profile: Profile,
    /// Task id sequence for page loads.
    pub task_seq: TaskSeq,
    /// In-flight page loads, one slot per feed.
    pub tasks: Tasks,
    /// Whether showing a feed section triggers a page load.
    pub load_on_mount: bool,
    pub transition: Option<SlideTransition>,
    pub notice: Option<Notice>,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_navigation(config, Navigation::new())
    }

    pub fn with_navigation(config: &Config, navigation: Navigation) -> Self {
        Self {
            should_quit: false,
            navigation,
            focus: Focus::default(),
            feeds: Feeds::default(),
            settings: SettingsState::default(),
            preferences: config.preferences,
            profile: Profile::placeholder(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            load_on_mount: config.feed.load_on_mount,
            transition: None,
            notice: None,
            spinner_frame: 0,
        }
    }

    pub fn selected(&self) -> Option<Section> {
        self.navigation.selected()
    }

    /// The feed currently on screen, if a feed section is selected.
    pub fn active_feed(&self) -> Option<FeedKind> {
        self.selected().and_then(Section::feed)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_preferences(&self.preferences)
    }

    /// True while something on screen changes without input.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.tasks.is_any_running()
            || self.notice.is_some()
            || self
                .transition
                .is_some_and(|transition| !transition.is_finished(now))
    }
}
