//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Section lifecycle: showing a feed section mounts its view (one page load
//! when `load_on_mount` is set); leaving it tears the view down, cancelling any
//! in-flight load for that feed.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pulse_core::feed::FeedKind;
use pulse_core::navigation::Section;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::feed::{self, FeedAction, PageApplied};
use crate::settings;
use crate::sidebar::SlideTransition;
use crate::state::{AppState, Focus};
use crate::statusline::Notice;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Init => match app.selected() {
            Some(section) => mount_section(app, section),
            None => vec![],
        },
        UiEvent::Tick => {
            handle_tick(app, Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::PageLoaded { feed, completed } => {
            let applied = feed::handle_page_loaded(
                app.feeds.get_mut(feed),
                app.tasks.state_mut(feed),
                completed,
                feed,
            );
            if matches!(applied, PageApplied::Appended(n) if n > 0) && app.preferences.notifications
            {
                announce_new_post(app, feed);
            }
            vec![]
        }
        UiEvent::QuitRequested => quit(app),
    }
}

/// Selects `section`, tearing down the previous section and mounting the new
/// one. Re-selecting the active section does nothing.
pub fn select_section(app: &mut AppState, section: Section) -> Vec<UiEffect> {
    let Some(change) = app.navigation.select(section) else {
        return vec![];
    };
    tracing::info!(from = ?change.from, to = ?change.to, "section selected");

    let mut effects = Vec::new();
    if let Some(from) = change.from {
        effects.extend(unmount_section(app, from));
    }
    app.transition = Some(SlideTransition::start(change.direction()));
    effects.extend(mount_section(app, change.to));
    effects
}

/// Asks the feed for another page (no-op while one is loading).
pub fn request_more(app: &mut AppState, kind: FeedKind) -> Vec<UiEffect> {
    feed::request_more(
        app.feeds.get_mut(kind),
        app.tasks.state_mut(kind),
        &mut app.task_seq,
        kind,
    )
}

fn mount_section(app: &mut AppState, section: Section) -> Vec<UiEffect> {
    match section.feed() {
        Some(kind) if app.load_on_mount => request_more(app, kind),
        _ => vec![],
    }
}

fn unmount_section(app: &mut AppState, section: Section) -> Vec<UiEffect> {
    match section.feed() {
        Some(kind) => feed::unmount(app.feeds.get_mut(kind), app.tasks.state_mut(kind), kind),
        None => vec![],
    }
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = match app.selected() {
        Some(section) => unmount_section(app, section),
        None => vec![],
    };
    effects.push(UiEffect::Quit);
    effects
}

fn handle_tick(app: &mut AppState, now: Instant) {
    app.spinner_frame = app.spinner_frame.wrapping_add(1);
    if app.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
        app.notice = None;
    }
    if app
        .transition
        .is_some_and(|transition| transition.is_finished(now))
    {
        app.transition = None;
    }
}

fn announce_new_post(app: &mut AppState, kind: FeedKind) {
    if let Some(post) = app.feeds.get(kind).feed.posts().last() {
        app.notice = Some(Notice::new(format!("New post from {}", post.author.name)));
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return quit(app),
        KeyCode::Char('q') => return quit(app),
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            return Section::from_index(index)
                .map(|section| select_section(app, section))
                .unwrap_or_default();
        }
        KeyCode::Tab => {
            let next = app.selected().map_or(Section::ForYou, Section::next);
            return select_section(app, next);
        }
        KeyCode::BackTab => {
            let prev = app.selected().map_or(Section::Settings, Section::prev);
            return select_section(app, prev);
        }
        KeyCode::Char('r') => {
            return app
                .active_feed()
                .map(|kind| request_more(app, kind))
                .unwrap_or_default();
        }
        KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
            app.focus = Focus::Sidebar;
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Detail => handle_detail_key(app, key),
    }
}

fn handle_sidebar_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            let prev = app.selected().map_or(Section::ForYou, Section::prev);
            select_section(app, prev)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let next = app.selected().map_or(Section::ForYou, Section::next);
            select_section(app, next)
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            if app.selected().is_some() {
                app.focus = Focus::Detail;
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match app.selected() {
        Some(Section::ForYou | Section::Following) => {
            let Some(kind) = app.active_feed() else {
                return vec![];
            };
            match feed::handle_key(app.feeds.get_mut(kind), key) {
                FeedAction::RequestMore => request_more(app, kind),
                FeedAction::None => vec![],
            }
        }
        Some(Section::Settings) => {
            if let Some(notice) = settings::handle_key(&mut app.settings, &mut app.preferences, key)
            {
                app.notice = Some(notice);
            }
            vec![]
        }
        Some(Section::Profile) | None => vec![],
    }
}
