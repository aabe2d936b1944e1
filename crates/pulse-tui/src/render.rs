//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui Frame. They never mutate state or return effects.

use std::time::Instant;

use pulse_core::navigation::Section;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::feed::render_feed;
use crate::profile::render_profile;
use crate::settings::render_settings;
use crate::sidebar::{SIDEBAR_WIDTH, render_sidebar};
use crate::state::AppState;
use crate::statusline::render_status_line;

/// Height of the status line below the panes.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme().base()), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[0]);

    render_sidebar(app, frame, columns[0]);

    let detail = match app.transition {
        Some(transition) => transition.apply(columns[1], Instant::now()),
        None => columns[1],
    };
    render_detail(app, frame, detail);

    render_status_line(app, frame, rows[1]);
}

fn render_detail(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    match app.selected() {
        Some(section @ (Section::ForYou | Section::Following)) => {
            if let Some(kind) = section.feed() {
                render_feed(app, kind, frame, area);
            }
        }
        Some(Section::Profile) => render_profile(app, frame, area),
        Some(Section::Settings) => render_settings(app, frame, area),
        None => render_placeholder(app, frame, area),
    }
}

fn render_placeholder(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false));
    let text = Paragraph::new(Line::styled("Select a section", theme.muted()))
        .centered()
        .block(block)
        .style(theme.base());
    frame.render_widget(text, area);
}
