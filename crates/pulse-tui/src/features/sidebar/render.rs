use pulse_core::navigation::Section;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::state::{AppState, Focus};

pub const SIDEBAR_WIDTH: u16 = 20;

pub fn render_sidebar(app: &AppState, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    let focused = app.focus == Focus::Sidebar;

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", section.index() + 1), theme.muted()),
                Span::raw(section.title()),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title(Span::styled(" Pulse ", theme.accent_bold()));

    let list = List::new(items)
        .block(block)
        .style(theme.base())
        .highlight_style(theme.selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(app.selected().map(Section::index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
